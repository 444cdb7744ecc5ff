//! Update Trip Config Handler - gated replacement of the trip setup.
//!
//! Validates the credential before touching anything; a failed gate check
//! leaves the planner untouched and the raw fields unvalidated.

use std::sync::Arc;

use crate::domain::trip::{TripConfig, TripConfigError};
use crate::ports::{AccessDenied, AccessGate};

use super::super::TripPlanner;

/// Raw configuration fields as submitted by an administrator.
#[derive(Debug, Clone)]
pub struct TripConfigUpdate {
    pub rental_cost: f64,
    pub daily_insurance: f64,
    pub total_days: u32,
    pub seats: u32,
    pub start: String,
    pub payment_handle: Option<String>,
}

/// Errors from the gated configuration update.
#[derive(Debug, thiserror::Error)]
pub enum UpdateConfigError {
    /// The credential did not pass the gate.
    #[error(transparent)]
    Denied(#[from] AccessDenied),

    /// The submitted fields failed validation.
    #[error(transparent)]
    Config(#[from] TripConfigError),
}

/// Handler for administrative configuration changes.
pub struct UpdateTripConfigHandler {
    gate: Arc<dyn AccessGate>,
}

impl UpdateTripConfigHandler {
    /// Creates a new handler with the given gate.
    pub fn new(gate: Arc<dyn AccessGate>) -> Self {
        Self { gate }
    }

    /// Validates the credential and the fields, then replaces the
    /// planner's configuration.
    ///
    /// # Errors
    ///
    /// - `Denied` when the credential fails the gate check
    /// - `Config` when the submitted fields are invalid
    pub fn handle(
        &self,
        credential: &str,
        planner: &mut TripPlanner,
        update: TripConfigUpdate,
    ) -> Result<(), UpdateConfigError> {
        if !self.gate.is_authorized(credential) {
            tracing::warn!("configuration update rejected: bad credential");
            return Err(AccessDenied.into());
        }

        let mut config = TripConfig::from_raw(
            update.rental_cost,
            update.daily_insurance,
            update.total_days,
            update.seats,
            &update.start,
        )?;
        if let Some(handle) = update.payment_handle {
            config = config.with_payment_handle(handle);
        }

        planner.replace_config(config);
        Ok(())
    }
}
