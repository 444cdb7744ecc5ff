//! Booking-specific error types.

use thiserror::Error;

use crate::domain::trip::SlotKey;

/// Errors raised by booking registry mutations.
///
/// `cancel` and driver unassignment never fail; cleanup stays safe to
/// repeat.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookingError {
    /// The (date, slot) pair is outside the current schedule.
    #[error("no bookable slot at {key}")]
    SlotNotFound { key: SlotKey },

    /// The slot already holds as many people as the vehicle seats.
    #[error("slot is full (capacity {capacity})")]
    SlotFull { capacity: u32 },

    /// The person already holds a reservation for this exact slot.
    #[error("'{name}' is already registered for this slot")]
    DuplicatePerson { name: String },
}

impl BookingError {
    pub fn slot_not_found(key: SlotKey) -> Self {
        BookingError::SlotNotFound { key }
    }

    pub fn slot_full(capacity: u32) -> Self {
        BookingError::SlotFull { capacity }
    }

    pub fn duplicate_person(name: impl Into<String>) -> Self {
        BookingError::DuplicatePerson { name: name.into() }
    }
}
