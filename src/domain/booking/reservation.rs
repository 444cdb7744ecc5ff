//! Reservation entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PersonName, ReservationId};
use crate::domain::trip::{SlotKey, TimeSlot};

/// One person occupying one seat in one (date, slot).
///
/// Owned exclusively by the booking registry. Created on a successful
/// join, removed only by explicit cancellation; driver reassignment
/// toggles the flag, never deletes the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    name: PersonName,
    key: SlotKey,
    is_driver: bool,
}

impl Reservation {
    /// Creates a new reservation. Joins never start as driver; the flag
    /// is assigned separately per slot.
    pub fn new(name: PersonName, key: SlotKey) -> Self {
        Self {
            id: ReservationId::new(),
            name,
            key,
            is_driver: false,
        }
    }

    /// Returns the reservation id.
    pub fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the person holding the seat.
    pub fn name(&self) -> &PersonName {
        &self.name
    }

    /// Returns the (date, slot) this reservation occupies.
    pub fn key(&self) -> SlotKey {
        self.key
    }

    /// Returns the reservation date.
    pub fn date(&self) -> NaiveDate {
        self.key.date
    }

    /// Returns the reservation slot.
    pub fn slot(&self) -> TimeSlot {
        self.key.slot
    }

    /// True when this person drives for the slot.
    pub fn is_driver(&self) -> bool {
        self.is_driver
    }

    pub(super) fn set_driver(&mut self, is_driver: bool) {
        self.is_driver = is_driver;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> SlotKey {
        SlotKey::new("2025-07-04".parse().unwrap(), TimeSlot::Morning)
    }

    #[test]
    fn new_reservation_is_not_driver() {
        let res = Reservation::new(PersonName::new("Alice").unwrap(), key());
        assert!(!res.is_driver());
        assert_eq!(res.name().display(), "Alice");
        assert_eq!(res.slot(), TimeSlot::Morning);
    }

    #[test]
    fn ids_are_unique_per_reservation() {
        let a = Reservation::new(PersonName::new("Alice").unwrap(), key());
        let b = Reservation::new(PersonName::new("Alice").unwrap(), key());
        assert_ne!(a.id(), b.id());
    }
}
