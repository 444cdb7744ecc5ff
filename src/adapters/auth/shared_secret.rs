//! Shared-secret gate adapter.
//!
//! One password shared by the trip's administrators unlocks configuration
//! and expense administration. Comparison is constant-time.

use secrecy::{ExposeSecret, Secret};
use subtle::ConstantTimeEq;

use crate::ports::AccessGate;

/// Gate backed by a single shared admin password.
pub struct SharedSecretGate {
    secret: Secret<String>,
}

impl SharedSecretGate {
    /// Creates a gate for the given shared secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Secret::new(secret.into()),
        }
    }
}

impl AccessGate for SharedSecretGate {
    fn is_authorized(&self, credential: &str) -> bool {
        credential
            .as_bytes()
            .ct_eq(self.secret.expose_secret().as_bytes())
            .into()
    }
}
