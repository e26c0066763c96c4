//! Schedule output structures for installment simulations

use serde::{Deserialize, Serialize};

/// A single installment in the present-value schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentLine {
    /// 1-based sequence number
    pub index: u32,

    /// Month at which this installment is discounted
    pub month: u32,

    /// Nominal value of the installment (equal across the schedule)
    pub installment_amount: f64,

    /// Compound discount factor for `month`
    pub discount_factor: f64,

    /// `installment_amount * discount_factor`
    pub present_value: f64,
}

/// Complete simulation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Nominal value of each installment
    pub installment_amount: f64,

    /// Per-installment schedule, ascending by index
    pub lines: Vec<InstallmentLine>,

    /// Sum of present values across the schedule, accumulated in index order
    pub total_present_value: f64,

    /// Nominal total minus total present value
    pub absolute_discount: f64,

    /// Absolute discount as a fraction of the nominal total
    /// (0 when the nominal total is 0)
    pub percent_discount: f64,
}
