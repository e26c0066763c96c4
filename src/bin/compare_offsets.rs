//! Compare schedules with the first installment at month 0 vs month 1
//!
//! Usage: cargo run --bin compare_offsets

use installment_simulator::format::{format_currency, format_percent};
use installment_simulator::{simulate, SimulationInput};

fn main() {
    env_logger::init();

    let plans = vec![(1000.0, 5_u32, 0.01), (3500.0, 12, 0.008416)];

    for (amount, count, rate) in plans {
        println!("\n{}", "=".repeat(60));
        println!(
            "{} in {}x at {} per month",
            format_currency(amount),
            count,
            format_percent(rate)
        );
        println!("{}", "=".repeat(60));

        let at_month_one =
            simulate(&SimulationInput::new(amount, count, rate)).expect("rate is above -1");
        let at_month_zero = simulate(&SimulationInput {
            first_installment_at_month_zero: true,
            ..SimulationInput::new(amount, count, rate)
        })
        .expect("rate is above -1");

        for (label, result) in [("month 1", &at_month_one), ("month 0", &at_month_zero)] {
            println!("\n  First installment at {}:", label);
            println!(
                "    Total Present Value: {}",
                format_currency(result.total_present_value)
            );
            println!(
                "    Absolute Discount:   {}",
                format_currency(result.absolute_discount)
            );
            println!(
                "    Percent Discount:    {}",
                format_percent(result.percent_discount)
            );
        }

        // Paying the first installment up front forfeits one month of
        // discounting on every line
        println!(
            "\n  PV increase from paying at month 0: {}",
            format_currency(at_month_zero.total_present_value - at_month_one.total_present_value)
        );
    }
}
