//! Application layer: the planner facade and its command handlers.

mod handlers;
mod planner;

pub use handlers::{
    ExpenseAdminError, ManageExpensesHandler, ScanReceiptHandler, TripAdviceHandler,
    TripConfigUpdate, UpdateConfigError, UpdateTripConfigHandler, FALLBACK_ADVICE,
};
pub use planner::TripPlanner;

use crate::domain::booking::BookingError;
use crate::domain::foundation::ValidationError;

/// Errors from planner operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlannerError {
    /// Input failed field validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A booking rule was violated.
    #[error(transparent)]
    Booking(#[from] BookingError),
}
