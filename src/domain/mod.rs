//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `trip` - Trip configuration and schedule expansion
//! - `booking` - Seat reservations and the booking registry
//! - `expense` - Fuel and out-of-pocket expense entries
//! - `sharing` - Cost aggregation and pro-rata share calculation

pub mod booking;
pub mod expense;
pub mod foundation;
pub mod sharing;
pub mod trip;
