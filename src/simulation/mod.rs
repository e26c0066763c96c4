//! Present-value simulation for fixed-installment plans

mod engine;
mod plan;
mod schedule;

pub use engine::{discount_factor, simulate, SimulationError};
pub use plan::SimulationInput;
pub use schedule::{InstallmentLine, SimulationResult};
