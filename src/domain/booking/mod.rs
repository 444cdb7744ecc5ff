//! Seat reservations and the booking registry.

mod errors;
mod registry;
mod reservation;

pub use errors::BookingError;
pub use registry::{BookingRegistry, PersonSlotCount};
pub use reservation::Reservation;
