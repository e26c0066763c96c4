//! Installment Simulator - Present-value engine for fixed-installment payment plans
//!
//! This library provides:
//! - Present-value schedules for amounts split into equal monthly installments
//! - Aggregate discount metrics (absolute and percentage)
//! - Cents rounding for display values
//! - Brazilian Portuguese (pt-BR) currency, percentage and number formatting

pub mod format;
pub mod rounding;
pub mod simulation;

// Re-export commonly used types
pub use rounding::round_to_cents;
pub use simulation::{
    discount_factor, simulate, InstallmentLine, SimulationError, SimulationInput, SimulationResult,
};
