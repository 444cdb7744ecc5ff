//! Person name value object.
//!
//! People are identified by name, not by account. Uniqueness checks use a
//! normalized key (trimmed, lowercased) while the original casing of the
//! first entry is preserved for display.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A person's name as entered, with a derived normalized key for comparisons.
///
/// # Invariants
///
/// - The display form is trimmed and non-empty.
/// - Two names are equal iff their normalized keys are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonName {
    display: String,
}

impl PersonName {
    /// Creates a person name from raw input.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the input is empty or whitespace-only
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            display: trimmed.to_string(),
        })
    }

    /// Returns the name as entered (trimmed), for display.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the normalized comparison key (lowercased).
    pub fn key(&self) -> String {
        self.display.to_lowercase()
    }
}

impl PartialEq for PersonName {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for PersonName {}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display)
    }
}
