//! Plan parameters for an installment simulation

use serde::{Deserialize, Serialize};

/// Parameters for one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    /// Nominal amount to be paid across all installments
    pub total_amount: f64,

    /// Number of installments the amount is split into
    pub installment_count: u32,

    /// Discount rate per month, as a decimal fraction (0.008416 = 0.8416%)
    pub monthly_rate: f64,

    /// If true, the first installment is due at month 0 and carries no
    /// discount; otherwise it falls at month 1
    pub first_installment_at_month_zero: bool,
}

impl SimulationInput {
    /// Create a plan with the first installment one month out
    pub fn new(total_amount: f64, installment_count: u32, monthly_rate: f64) -> Self {
        Self {
            total_amount,
            installment_count,
            monthly_rate,
            first_installment_at_month_zero: false,
        }
    }

    /// Month of the first installment: 0 or 1
    pub fn month_offset(&self) -> u32 {
        if self.first_installment_at_month_zero {
            0
        } else {
            1
        }
    }
}
