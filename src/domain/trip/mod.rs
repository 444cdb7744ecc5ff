//! Trip configuration and schedule expansion.

mod config;
mod errors;
mod schedule;

pub use config::{TripConfig, VehicleClass};
pub use errors::TripConfigError;
pub use schedule::{SlotKey, TimeSlot, TripSchedule};
