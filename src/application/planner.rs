//! TripPlanner - the facade the presentation layer talks to.
//!
//! Owns the current configuration, its expanded schedule, the booking
//! registry and the expense log. All mutations are synchronous in-memory
//! transformations; wrap the whole planner in one lock if multiple
//! callers need it.

use chrono::NaiveDate;

use crate::domain::booking::{BookingRegistry, PersonSlotCount, Reservation};
use crate::domain::expense::{ExpenseEntry, ExpenseLog};
use crate::domain::foundation::{ExpenseId, PersonName, ReservationId};
use crate::domain::sharing::{ShareCalculator, ShareReport};
use crate::domain::trip::{SlotKey, TimeSlot, TripConfig, TripSchedule};

use super::PlannerError;

/// In-memory state for one trip.
#[derive(Debug, Clone)]
pub struct TripPlanner {
    config: TripConfig,
    schedule: TripSchedule,
    registry: BookingRegistry,
    expenses: ExpenseLog,
}

impl TripPlanner {
    /// Creates a planner for a validated configuration.
    pub fn new(config: TripConfig) -> Self {
        let schedule = TripSchedule::expand(&config);
        Self {
            config,
            schedule,
            registry: BookingRegistry::new(),
            expenses: ExpenseLog::new(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &TripConfig {
        &self.config
    }

    /// The (date, slot) universe for rendering and validation.
    pub fn expand_dates(&self) -> &TripSchedule {
        &self.schedule
    }

    /// Books a seat for one person in one (date, slot).
    ///
    /// # Errors
    ///
    /// - `Validation` if the name is empty
    /// - `Booking` for slot-not-found, slot-full and duplicate-person
    pub fn join(
        &mut self,
        name: &str,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Result<ReservationId, PlannerError> {
        let person = PersonName::new(name)?;
        let id = self.registry.join(
            &self.schedule,
            self.config.capacity(),
            person,
            date,
            slot,
        )?;
        tracing::debug!(%id, %date, %slot, "seat booked");
        Ok(id)
    }

    /// Cancels a reservation. Safe to repeat.
    pub fn cancel(&mut self, id: ReservationId) {
        self.registry.cancel(id);
        tracing::debug!(%id, "reservation cancelled");
    }

    /// Designates (or clears) the driver for one (date, slot).
    ///
    /// # Errors
    ///
    /// - `Booking` if (date, slot) is outside the schedule
    pub fn assign_driver(
        &mut self,
        date: NaiveDate,
        slot: TimeSlot,
        driver: Option<ReservationId>,
    ) -> Result<(), PlannerError> {
        self.registry
            .assign_driver(&self.schedule, date, slot, driver)?;
        Ok(())
    }

    /// Reservations for one (date, slot) in join order.
    pub fn list_by_slot(&self, date: NaiveDate, slot: TimeSlot) -> Vec<&Reservation> {
        self.registry.list_by_slot(date, slot)
    }

    /// Per-person reservation counts, ordered by first appearance.
    pub fn per_person_slot_counts(&self) -> Vec<PersonSlotCount> {
        self.registry.per_person_slot_counts()
    }

    /// Occupied slots still needing a driver.
    pub fn slots_missing_driver(&self) -> Vec<SlotKey> {
        self.registry.slots_missing_driver(&self.schedule)
    }

    /// Logs an expense.
    ///
    /// # Errors
    ///
    /// - `Validation` if the amount is negative
    pub fn add_expense(
        &mut self,
        amount: f64,
        date: NaiveDate,
        note: impl Into<String>,
    ) -> Result<ExpenseId, PlannerError> {
        let entry = ExpenseEntry::new(amount, date, note)?;
        let id = self.expenses.add(entry);
        tracing::debug!(%id, amount, "expense logged");
        Ok(id)
    }

    /// Removes an expense. Safe to repeat.
    pub fn remove_expense(&mut self, id: ExpenseId) {
        self.expenses.remove(id);
    }

    /// The logged expenses in insertion order.
    pub fn expenses(&self) -> &[ExpenseEntry] {
        self.expenses.entries()
    }

    /// Replaces the configuration and re-expands the schedule.
    ///
    /// Existing reservations are kept even when the new schedule no
    /// longer covers them; they were valid when made and pruning is the
    /// administrator's call.
    pub fn replace_config(&mut self, config: TripConfig) {
        self.schedule = TripSchedule::expand(&config);
        self.config = config;
        tracing::info!(
            days = self.config.total_days(),
            capacity = self.config.capacity(),
            "trip configuration replaced"
        );
    }

    /// Computes the current share report from scratch.
    pub fn compute_shares(&self) -> ShareReport {
        ShareCalculator::compute_shares(&self.config, &self.registry, self.expenses.entries())
    }
}
