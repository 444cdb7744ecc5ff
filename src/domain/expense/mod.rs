//! Expense entries (fuel and other out-of-pocket costs).
//!
//! Entries arrive from manual entry or from receipt scanning; the engine
//! treats both identically and never validates them against bookings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ExpenseId, ValidationError};

/// One logged expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    id: ExpenseId,
    amount: f64,
    date: NaiveDate,
    note: String,
}

impl ExpenseEntry {
    /// Creates a new expense entry.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if `amount` is NaN or infinite
    /// - `NegativeAmount` if `amount` is negative
    pub fn new(
        amount: f64,
        date: NaiveDate,
        note: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if !amount.is_finite() {
            return Err(ValidationError::invalid_format(
                "amount",
                "not a finite number",
            ));
        }
        if amount < 0.0 {
            return Err(ValidationError::negative_amount("amount", amount));
        }
        Ok(Self {
            id: ExpenseId::new(),
            amount,
            date,
            note: note.into(),
        })
    }

    /// Returns the expense id.
    pub fn id(&self) -> ExpenseId {
        self.id
    }

    /// Returns the amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the expense date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the free-text note.
    pub fn note(&self) -> &str {
        &self.note
    }
}

/// Insertion-ordered list of expenses for the trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseLog {
    entries: Vec<ExpenseEntry>,
}

impl ExpenseLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and returns its id.
    pub fn add(&mut self, entry: ExpenseEntry) -> ExpenseId {
        let id = entry.id();
        self.entries.push(entry);
        id
    }

    /// Removes an entry. Idempotent: unknown ids are a no-op.
    pub fn remove(&mut self, id: ExpenseId) {
        self.entries.retain(|e| e.id() != id);
    }

    /// The entries in insertion order.
    pub fn entries(&self) -> &[ExpenseEntry] {
        &self.entries
    }

    /// Sum of all entry amounts.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.amount()).sum()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn add_and_total() {
        let mut log = ExpenseLog::new();
        log.add(ExpenseEntry::new(30.0, date("2025-07-04"), "Shell").unwrap());
        log.add(ExpenseEntry::new(20.0, date("2025-07-05"), "Chevron").unwrap());

        assert_eq!(log.len(), 2);
        assert_eq!(log.total(), 50.0);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut log = ExpenseLog::new();
        let id = log.add(ExpenseEntry::new(30.0, date("2025-07-04"), "Shell").unwrap());

        log.remove(id);
        assert!(log.is_empty());
        log.remove(id);
        assert!(log.is_empty());
    }

    #[test]
    fn rejects_negative_amounts() {
        let err = ExpenseEntry::new(-5.0, date("2025-07-04"), "bad scan").unwrap_err();
        assert!(matches!(err, ValidationError::NegativeAmount { .. }));
    }

    #[test]
    fn rejects_non_finite_amounts() {
        let err = ExpenseEntry::new(f64::NAN, date("2025-07-04"), "bad").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));

        let err = ExpenseEntry::new(f64::INFINITY, date("2025-07-04"), "bad").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn zero_amount_is_allowed() {
        // Scanned receipts default a missing amount to zero
        let entry = ExpenseEntry::new(0.0, date("2025-07-04"), "Gas Receipt").unwrap();
        assert_eq!(entry.amount(), 0.0);
    }

    #[test]
    fn entries_keep_insertion_order() {
        let mut log = ExpenseLog::new();
        log.add(ExpenseEntry::new(1.0, date("2025-07-04"), "first").unwrap());
        log.add(ExpenseEntry::new(2.0, date("2025-07-04"), "second").unwrap());

        let notes: Vec<_> = log.entries().iter().map(|e| e.note()).collect();
        assert_eq!(notes, vec!["first", "second"]);
    }
}
