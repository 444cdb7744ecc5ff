//! Cost aggregation and pro-rata share calculation.

mod calculator;
mod costs;

pub use calculator::{PersonShare, ShareCalculator, ShareReport};
pub use costs::CostBreakdown;
