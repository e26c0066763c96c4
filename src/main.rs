//! Installment Simulator CLI
//!
//! Runs a present-value simulation for a fixed-installment plan and prints
//! the schedule with pt-BR formatting

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use installment_simulator::format::{format_currency, format_number_with, format_percent};
use installment_simulator::{round_to_cents, simulate, SimulationInput, SimulationResult};

/// Present-value simulation for a fixed-installment payment plan
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Nominal amount to be paid in installments
    #[arg(long)]
    amount: f64,

    /// Number of installments
    #[arg(long)]
    installments: u32,

    /// Monthly discount rate as a decimal fraction (0.008416 = 0.8416%)
    #[arg(long)]
    rate: f64,

    /// Discount the first installment at month 0 instead of month 1
    #[arg(long)]
    month_zero: bool,

    /// Write the full schedule to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the result as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let input = SimulationInput {
        total_amount: args.amount,
        installment_count: args.installments,
        monthly_rate: args.rate,
        first_installment_at_month_zero: args.month_zero,
    };

    log::debug!("simulating plan: {:?}", input);
    let result = simulate(&input)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_schedule(&input, &result);
    }

    if let Some(path) = &args.csv {
        write_csv(path, &result)?;
        println!("\nFull schedule written to: {}", path.display());
    }

    Ok(())
}

fn print_schedule(input: &SimulationInput, result: &SimulationResult) {
    println!("Installment Simulator v0.1.0");
    println!("============================\n");

    println!(
        "Plan: {} in {}x of {}",
        format_currency(input.total_amount),
        input.installment_count,
        format_currency(round_to_cents(result.installment_amount)),
    );
    println!("Monthly rate: {}", format_percent(input.monthly_rate));
    println!("First installment at month {}\n", input.month_offset());

    println!(
        "{:>5} {:>6} {:>16} {:>12} {:>16}",
        "#", "Month", "Installment", "Factor", "Present Value"
    );
    println!("{}", "-".repeat(60));

    for line in &result.lines {
        println!(
            "{:>5} {:>6} {:>16} {:>12} {:>16}",
            line.index,
            line.month,
            format_currency(round_to_cents(line.installment_amount)),
            format_number_with(line.discount_factor, 6),
            format_currency(round_to_cents(line.present_value)),
        );
    }

    println!("\nSummary:");
    println!(
        "  Total Present Value: {}",
        format_currency(round_to_cents(result.total_present_value))
    );
    println!(
        "  Absolute Discount:   {}",
        format_currency(round_to_cents(result.absolute_discount))
    );
    println!(
        "  Percent Discount:    {}",
        format_percent(result.percent_discount)
    );
}

fn write_csv(path: &Path, result: &SimulationResult) -> anyhow::Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;

    writeln!(file, "Index,Month,Installment,DiscountFactor,PresentValue")?;
    for line in &result.lines {
        writeln!(
            file,
            "{},{},{:.8},{:.8},{:.8}",
            line.index, line.month, line.installment_amount, line.discount_factor, line.present_value,
        )?;
    }

    Ok(())
}
