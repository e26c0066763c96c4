//! Present-value engine for fixed-installment plans

use thiserror::Error;

use super::plan::SimulationInput;
use super::schedule::{InstallmentLine, SimulationResult};

/// Errors raised by [`simulate`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// The discount formula divides by `(1 + rate)^month`, which is zero at
    /// rate -1 and flips sign below it
    #[error("monthly rate must be greater than -1, got {rate}")]
    InvalidRate { rate: f64 },
}

/// Compound discount factor converting a value at `month` to present value.
///
/// `month = 0` yields exactly 1.0 (no time decay).
pub fn discount_factor(month: u32, monthly_rate: f64) -> f64 {
    1.0 / (1.0 + monthly_rate).powi(month as i32)
}

/// Run a present-value simulation for a fixed-installment plan.
///
/// Splits `total_amount` evenly across `installment_count` installments and
/// discounts each one at `monthly_rate` compounded monthly. The first
/// installment falls at month 0 or month 1 depending on
/// `first_installment_at_month_zero`.
///
/// # Arguments
/// * `input` - Plan parameters. A zero `installment_count` yields an empty
///   schedule, a zero rate yields factor 1.0 for every month, and negative
///   amounts propagate arithmetically. Rates at or below -1 are rejected.
///
/// # Returns
/// * `Ok(SimulationResult)` with the schedule in ascending index order
/// * `Err(SimulationError::InvalidRate)` when `monthly_rate <= -1`
pub fn simulate(input: &SimulationInput) -> Result<SimulationResult, SimulationError> {
    if input.monthly_rate <= -1.0 {
        return Err(SimulationError::InvalidRate {
            rate: input.monthly_rate,
        });
    }

    let installment_amount = if input.installment_count > 0 {
        input.total_amount / input.installment_count as f64
    } else {
        0.0
    };
    let offset = input.month_offset();

    let mut lines = Vec::with_capacity(input.installment_count as usize);
    let mut total_present_value = 0.0;

    // Accumulate in index order so repeated runs reproduce the same
    // floating-point rounding
    for index in 1..=input.installment_count {
        let month = offset + (index - 1);
        let factor = discount_factor(month, input.monthly_rate);
        let present_value = installment_amount * factor;
        total_present_value += present_value;

        lines.push(InstallmentLine {
            index,
            month,
            installment_amount,
            discount_factor: factor,
            present_value,
        });
    }

    let absolute_discount = input.total_amount - total_present_value;
    let percent_discount = if input.total_amount > 0.0 {
        absolute_discount / input.total_amount
    } else {
        0.0
    };

    Ok(SimulationResult {
        installment_amount,
        lines,
        total_present_value,
        absolute_discount,
        percent_discount,
    })
}
