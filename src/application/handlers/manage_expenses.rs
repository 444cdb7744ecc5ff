//! Manage Expenses Handler - gated expense administration.
//!
//! Adding and removing expenses is an administrative action behind the
//! same credential as configuration changes. A failed gate check leaves
//! the expense log untouched.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::ExpenseId;
use crate::ports::{AccessDenied, AccessGate};

use super::super::{PlannerError, TripPlanner};

/// Errors from gated expense administration.
#[derive(Debug, thiserror::Error)]
pub enum ExpenseAdminError {
    /// The credential did not pass the gate.
    #[error(transparent)]
    Denied(#[from] AccessDenied),

    /// The expense itself was invalid.
    #[error(transparent)]
    Planner(#[from] PlannerError),
}

/// Handler for administrative expense changes.
pub struct ManageExpensesHandler {
    gate: Arc<dyn AccessGate>,
}

impl ManageExpensesHandler {
    /// Creates a new handler with the given gate.
    pub fn new(gate: Arc<dyn AccessGate>) -> Self {
        Self { gate }
    }

    /// Validates the credential, then logs an expense.
    ///
    /// # Errors
    ///
    /// - `Denied` when the credential fails the gate check
    /// - `Planner` when the amount is invalid
    pub fn add_expense(
        &self,
        credential: &str,
        planner: &mut TripPlanner,
        amount: f64,
        date: NaiveDate,
        note: impl Into<String>,
    ) -> Result<ExpenseId, ExpenseAdminError> {
        self.check(credential)?;
        Ok(planner.add_expense(amount, date, note)?)
    }

    /// Validates the credential, then removes an expense. Removal itself
    /// is idempotent.
    ///
    /// # Errors
    ///
    /// - `Denied` when the credential fails the gate check
    pub fn remove_expense(
        &self,
        credential: &str,
        planner: &mut TripPlanner,
        id: ExpenseId,
    ) -> Result<(), ExpenseAdminError> {
        self.check(credential)?;
        planner.remove_expense(id);
        Ok(())
    }

    fn check(&self, credential: &str) -> Result<(), AccessDenied> {
        if !self.gate.is_authorized(credential) {
            tracing::warn!("expense change rejected: bad credential");
            return Err(AccessDenied);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::SharedSecretGate;
    use crate::domain::trip::TripConfig;

    fn planner() -> TripPlanner {
        let config = TripConfig::from_raw(200.0, 25.0, 3, 5, "2025-07-04T09:00").unwrap();
        TripPlanner::new(config)
    }

    fn handler() -> ManageExpensesHandler {
        ManageExpensesHandler::new(Arc::new(SharedSecretGate::new("admin")))
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn authorized_add_and_remove() {
        let handler = handler();
        let mut planner = planner();

        let id = handler
            .add_expense("admin", &mut planner, 48.2, date("2025-07-04"), "Shell")
            .unwrap();
        assert_eq!(planner.expenses().len(), 1);

        handler.remove_expense("admin", &mut planner, id).unwrap();
        assert!(planner.expenses().is_empty());
    }

    #[test]
    fn wrong_credential_leaves_the_log_untouched() {
        let handler = handler();
        let mut planner = planner();

        let err = handler
            .add_expense("guess", &mut planner, 48.2, date("2025-07-04"), "Shell")
            .unwrap_err();
        assert!(matches!(err, ExpenseAdminError::Denied(_)));
        assert!(planner.expenses().is_empty());

        let id = handler
            .add_expense("admin", &mut planner, 10.0, date("2025-07-04"), "Shell")
            .unwrap();
        let err = handler.remove_expense("guess", &mut planner, id).unwrap_err();
        assert!(matches!(err, ExpenseAdminError::Denied(_)));
        assert_eq!(planner.expenses().len(), 1);
    }

    #[test]
    fn invalid_amount_is_rejected_after_the_gate() {
        let handler = handler();
        let mut planner = planner();

        let err = handler
            .add_expense("admin", &mut planner, -5.0, date("2025-07-04"), "bad")
            .unwrap_err();
        assert!(matches!(err, ExpenseAdminError::Planner(_)));
        assert!(planner.expenses().is_empty());
    }
}
