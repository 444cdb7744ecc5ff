//! Trip configuration error types.

use thiserror::Error;

/// Errors raised when a trip configuration is invalid.
///
/// All monetary and calendar validation happens at this boundary; the
/// booking and sharing engines assume a validated configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TripConfigError {
    /// Trip length must be at least one day.
    #[error("total days must be positive, got {days}")]
    NonPositiveDays { days: i64 },

    /// The start timestamp could not be parsed.
    #[error("invalid start timestamp '{input}'")]
    InvalidStartTimestamp { input: String },

    /// A monetary field was negative.
    #[error("field '{field}' cannot be negative, got {amount}")]
    NegativeAmount { field: &'static str, amount: f64 },

    /// The requested seat count is not a supported vehicle size.
    #[error("unsupported vehicle capacity: {seats} seats")]
    UnsupportedCapacity { seats: u32 },

    /// The trip's final date falls outside the representable calendar.
    #[error("trip of {days} days ends beyond the supported calendar range")]
    EndDateOutOfRange { days: u32 },
}

impl TripConfigError {
    pub fn non_positive_days(days: i64) -> Self {
        TripConfigError::NonPositiveDays { days }
    }

    pub fn invalid_start_timestamp(input: impl Into<String>) -> Self {
        TripConfigError::InvalidStartTimestamp {
            input: input.into(),
        }
    }

    pub fn negative_amount(field: &'static str, amount: f64) -> Self {
        TripConfigError::NegativeAmount { field, amount }
    }

    pub fn unsupported_capacity(seats: u32) -> Self {
        TripConfigError::UnsupportedCapacity { seats }
    }

    pub fn end_date_out_of_range(days: u32) -> Self {
        TripConfigError::EndDateOutOfRange { days }
    }
}
