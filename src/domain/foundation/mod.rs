//! Shared domain primitives (value objects, IDs, errors).

mod errors;
mod ids;
mod money;
mod person;

pub use errors::ValidationError;
pub use ids::{ExpenseId, ReservationId};
pub use money::round2;
pub use person::PersonName;
