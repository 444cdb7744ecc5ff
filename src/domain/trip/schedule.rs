//! Schedule expansion: the (date, slot) universe for a configured trip.
//!
//! Every calendar day of the trip contributes an Afternoon slot; it also
//! contributes a Morning slot unless it is the first day and the trip
//! starts at or after noon. Expansion is a pure function of the validated
//! configuration.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::TripConfig;

/// A half-day booking unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
}

impl TimeSlot {
    /// Returns the display label for this slot.
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning",
            TimeSlot::Afternoon => "Afternoon",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A bookable (date, slot) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotKey {
    pub date: NaiveDate,
    pub slot: TimeSlot,
}

impl SlotKey {
    pub fn new(date: NaiveDate, slot: TimeSlot) -> Self {
        Self { date, slot }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.slot)
    }
}

/// The ordered (date, slot) universe for the current trip configuration.
///
/// Reservations are only valid against keys contained here. Rebuilt from
/// scratch whenever the configuration changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripSchedule {
    slots: Vec<SlotKey>,
}

impl TripSchedule {
    /// Expands the configuration into its ordered slot universe.
    pub fn expand(config: &TripConfig) -> Self {
        let first_date = config.start().date();
        let mut slots = Vec::with_capacity(config.total_days() as usize * 2);

        for day_index in 0..config.total_days() {
            let date = first_date
                .checked_add_days(Days::new(day_index as u64))
                .expect("every trip date is representable per config validation");

            let skip_morning = day_index == 0 && config.starts_in_afternoon();
            if !skip_morning {
                slots.push(SlotKey::new(date, TimeSlot::Morning));
            }
            slots.push(SlotKey::new(date, TimeSlot::Afternoon));
        }

        Self { slots }
    }

    /// True when (date, slot) is a legal booking target.
    pub fn contains(&self, date: NaiveDate, slot: TimeSlot) -> bool {
        self.slots.contains(&SlotKey::new(date, slot))
    }

    /// The slot keys in calendar order.
    pub fn slots(&self) -> &[SlotKey] {
        &self.slots
    }

    /// The distinct trip dates in order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = Vec::new();
        for key in &self.slots {
            if dates.last() != Some(&key.date) {
                dates.push(key.date);
            }
        }
        dates
    }

    /// Number of bookable slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no slots exist.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
