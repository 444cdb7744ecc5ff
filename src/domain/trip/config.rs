//! Trip configuration aggregate.
//!
//! A single mutable record describing the rental: costs, length, vehicle
//! size and start time. Replaced wholesale by an authorized administrator;
//! read by schedule expansion and cost aggregation.

use chrono::{Days, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use super::TripConfigError;

/// Supported vehicle sizes. Seat count doubles as slot capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    FiveSeater,
    SevenSeater,
}

impl VehicleClass {
    /// Maximum simultaneous occupants of one slot.
    pub fn capacity(&self) -> u32 {
        match self {
            VehicleClass::FiveSeater => 5,
            VehicleClass::SevenSeater => 7,
        }
    }

    /// Resolves a raw seat count to a supported class.
    ///
    /// # Errors
    ///
    /// - `UnsupportedCapacity` for anything other than 5 or 7 seats
    pub fn from_seats(seats: u32) -> Result<Self, TripConfigError> {
        match seats {
            5 => Ok(VehicleClass::FiveSeater),
            7 => Ok(VehicleClass::SevenSeater),
            other => Err(TripConfigError::unsupported_capacity(other)),
        }
    }

    /// Returns the display label for this class.
    pub fn label(&self) -> &'static str {
        match self {
            VehicleClass::FiveSeater => "5-seater",
            VehicleClass::SevenSeater => "7-seater",
        }
    }
}

/// Accepted start timestamp formats, tried in order.
const START_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Validated trip configuration.
///
/// # Invariants
///
/// - `rental_cost` and `daily_insurance` are non-negative and finite
/// - `total_days` is at least 1
/// - every date from the start through day `total_days - 1` is
///   representable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripConfig {
    /// Total vehicle rental cost for the whole trip.
    rental_cost: f64,

    /// Insurance cost per calendar day.
    daily_insurance: f64,

    /// Number of calendar days the trip spans.
    total_days: u32,

    /// Vehicle size, which fixes per-slot capacity.
    vehicle: VehicleClass,

    /// When the trip begins. An afternoon start removes the first
    /// morning slot.
    start: NaiveDateTime,

    /// Free-text payment contact shown to participants (e.g. a Zelle
    /// number). Informational only.
    payment_handle: Option<String>,
}

impl TripConfig {
    /// Creates a validated trip configuration.
    ///
    /// # Errors
    ///
    /// - `NonPositiveDays` if `total_days` is zero
    /// - `NegativeAmount` if a monetary field is negative or not finite
    /// - `EndDateOutOfRange` if the trip's last date is not representable
    pub fn new(
        rental_cost: f64,
        daily_insurance: f64,
        total_days: u32,
        vehicle: VehicleClass,
        start: NaiveDateTime,
    ) -> Result<Self, TripConfigError> {
        Self::validate_amount("rental_cost", rental_cost)?;
        Self::validate_amount("daily_insurance", daily_insurance)?;
        if total_days == 0 {
            return Err(TripConfigError::non_positive_days(0));
        }

        // Schedule expansion walks day by day from the start date; every
        // date it will touch must exist on the calendar.
        if start
            .date()
            .checked_add_days(Days::new(u64::from(total_days) - 1))
            .is_none()
        {
            return Err(TripConfigError::end_date_out_of_range(total_days));
        }

        Ok(Self {
            rental_cost,
            daily_insurance,
            total_days,
            vehicle,
            start,
            payment_handle: None,
        })
    }

    /// Creates a configuration from untyped admin-form input.
    ///
    /// # Errors
    ///
    /// - `InvalidStartTimestamp` if `start` matches none of the accepted
    ///   formats
    /// - `UnsupportedCapacity` if `seats` is not a supported vehicle size
    /// - plus everything [`TripConfig::new`] rejects
    pub fn from_raw(
        rental_cost: f64,
        daily_insurance: f64,
        total_days: u32,
        seats: u32,
        start: &str,
    ) -> Result<Self, TripConfigError> {
        let vehicle = VehicleClass::from_seats(seats)?;
        let parsed = Self::parse_start(start)?;
        Self::new(rental_cost, daily_insurance, total_days, vehicle, parsed)
    }

    /// Sets the payment contact handle.
    pub fn with_payment_handle(mut self, handle: impl Into<String>) -> Self {
        self.payment_handle = Some(handle.into());
        self
    }

    /// Returns the total rental cost.
    pub fn rental_cost(&self) -> f64 {
        self.rental_cost
    }

    /// Returns the per-day insurance rate.
    pub fn daily_insurance(&self) -> f64 {
        self.daily_insurance
    }

    /// Returns the trip length in days.
    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    /// Returns the vehicle class.
    pub fn vehicle(&self) -> VehicleClass {
        self.vehicle
    }

    /// Returns the per-slot seat capacity.
    pub fn capacity(&self) -> u32 {
        self.vehicle.capacity()
    }

    /// Returns the trip start timestamp.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the payment contact handle, if set.
    pub fn payment_handle(&self) -> Option<&str> {
        self.payment_handle.as_deref()
    }

    /// True when the trip begins at or after noon on day one.
    pub fn starts_in_afternoon(&self) -> bool {
        self.start.hour() >= 12
    }

    fn validate_amount(field: &'static str, amount: f64) -> Result<(), TripConfigError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(TripConfigError::negative_amount(field, amount));
        }
        Ok(())
    }

    fn parse_start(input: &str) -> Result<NaiveDateTime, TripConfigError> {
        for format in START_FORMATS {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
                return Ok(parsed);
            }
        }
        Err(TripConfigError::invalid_start_timestamp(input))
    }
}
