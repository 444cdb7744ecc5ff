//! Booking registry: owns every reservation and enforces slot invariants.
//!
//! # Invariants (hold after every mutation)
//!
//! - per (date, slot): reservation count never exceeds vehicle capacity
//! - per (date, slot): at most one reservation per normalized person name
//! - per (date, slot): at most one reservation with the driver flag set
//! - new reservations only target (date, slot) pairs in the current
//!   schedule
//!
//! Single-writer, single-threaded semantics: no mutation suspends or does
//! I/O, and reads always see a fully applied state. Callers needing
//! concurrent access must put one mutual-exclusion boundary around the
//! whole registry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PersonName, ReservationId};
use crate::domain::trip::{SlotKey, TimeSlot, TripSchedule};

use super::{BookingError, Reservation};

/// A person's total reservation count across all dates and slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonSlotCount {
    /// Display name as first entered.
    pub name: String,
    /// Total person-slots held.
    pub count: u32,
}

/// Holds the set of reservations in join order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingRegistry {
    reservations: Vec<Reservation>,
}

impl BookingRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Books a seat for one person in one (date, slot).
    ///
    /// Each call targets exactly one slot; multi-slot requests are a
    /// sequence of joins and are deliberately not atomic.
    ///
    /// # Errors
    ///
    /// - `SlotNotFound` if (date, slot) is outside the schedule
    /// - `SlotFull` if occupancy already equals `capacity`
    /// - `DuplicatePerson` if the same normalized name already holds this
    ///   exact (date, slot)
    pub fn join(
        &mut self,
        schedule: &TripSchedule,
        capacity: u32,
        person: PersonName,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Result<ReservationId, BookingError> {
        let key = SlotKey::new(date, slot);
        if !schedule.contains(date, slot) {
            return Err(BookingError::slot_not_found(key));
        }

        let occupancy = self.in_slot(key).count();
        if occupancy as u32 >= capacity {
            return Err(BookingError::slot_full(capacity));
        }

        if self.in_slot(key).any(|r| r.name() == &person) {
            return Err(BookingError::duplicate_person(person.display()));
        }

        let reservation = Reservation::new(person, key);
        let id = reservation.id();
        self.reservations.push(reservation);
        Ok(id)
    }

    /// Removes a reservation. Idempotent: removing an unknown id is a
    /// no-op, so cleanup is always safe to repeat.
    pub fn cancel(&mut self, id: ReservationId) {
        self.reservations.retain(|r| r.id() != id);
    }

    /// Designates the driver for one (date, slot) in a single pass.
    ///
    /// The reservation matching `driver` gets the flag; every other
    /// reservation in the slot loses it. `None` or an id not present in
    /// the slot clears the flag everywhere there - the unassigned state
    /// is explicit and valid. An empty slot is not an error.
    ///
    /// # Errors
    ///
    /// - `SlotNotFound` if (date, slot) is outside the schedule
    pub fn assign_driver(
        &mut self,
        schedule: &TripSchedule,
        date: NaiveDate,
        slot: TimeSlot,
        driver: Option<ReservationId>,
    ) -> Result<(), BookingError> {
        let key = SlotKey::new(date, slot);
        if !schedule.contains(date, slot) {
            return Err(BookingError::slot_not_found(key));
        }

        for reservation in self.reservations.iter_mut().filter(|r| r.key() == key) {
            reservation.set_driver(Some(reservation.id()) == driver);
        }
        Ok(())
    }

    /// Reservations for one (date, slot), in join order.
    pub fn list_by_slot(&self, date: NaiveDate, slot: TimeSlot) -> Vec<&Reservation> {
        self.in_slot(SlotKey::new(date, slot)).collect()
    }

    /// The designated driver for one (date, slot), if any.
    pub fn driver_of(&self, date: NaiveDate, slot: TimeSlot) -> Option<&Reservation> {
        self.in_slot(SlotKey::new(date, slot)).find(|r| r.is_driver())
    }

    /// Per-person reservation counts across all dates and slots, ordered
    /// by first appearance. Display casing comes from the person's first
    /// reservation. This is the figure share calculation consumes; which
    /// specific slots were booked does not matter, only the count.
    pub fn per_person_slot_counts(&self) -> Vec<PersonSlotCount> {
        let mut counts: Vec<(String, PersonSlotCount)> = Vec::new();

        for reservation in &self.reservations {
            let key = reservation.name().key();
            match counts.iter_mut().find(|(k, _)| *k == key) {
                Some((_, entry)) => entry.count += 1,
                None => counts.push((
                    key,
                    PersonSlotCount {
                        name: reservation.name().display().to_string(),
                        count: 1,
                    },
                )),
            }
        }

        counts.into_iter().map(|(_, entry)| entry).collect()
    }

    /// Occupied schedule slots that have no designated driver yet.
    pub fn slots_missing_driver(&self, schedule: &TripSchedule) -> Vec<SlotKey> {
        schedule
            .slots()
            .iter()
            .copied()
            .filter(|key| {
                let mut occupants = self.in_slot(*key).peekable();
                occupants.peek().is_some() && !occupants.any(|r| r.is_driver())
            })
            .collect()
    }

    /// Total number of reservations held.
    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    /// True when nobody has booked anything.
    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    fn in_slot(&self, key: SlotKey) -> impl Iterator<Item = &Reservation> {
        self.reservations.iter().filter(move |r| r.key() == key)
    }
}
