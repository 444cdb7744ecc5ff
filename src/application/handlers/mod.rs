//! Command handlers orchestrating ports and the planner.

mod manage_expenses;
mod scan_receipt;
mod trip_advice;
mod update_trip_config;

pub use manage_expenses::{ExpenseAdminError, ManageExpensesHandler};
pub use scan_receipt::ScanReceiptHandler;
pub use trip_advice::{TripAdviceHandler, FALLBACK_ADVICE};
pub use update_trip_config::{TripConfigUpdate, UpdateConfigError, UpdateTripConfigHandler};
