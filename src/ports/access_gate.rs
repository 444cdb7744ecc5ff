//! Access Gate Port - Interface for the shared-secret authorization check.
//!
//! The engine does not implement authentication; it only consumes a
//! yes/no outcome for administrative mutations (trip configuration,
//! expense administration). Synchronous by design: checking a shared
//! secret involves no I/O.

use thiserror::Error;

/// Port for the administrative access check.
pub trait AccessGate: Send + Sync {
    /// True when the presented credential authorizes admin operations.
    fn is_authorized(&self, credential: &str) -> bool;
}

/// Raised when a gated operation is attempted without authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("administrative access denied")]
pub struct AccessDenied;

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysOpen;

    impl AccessGate for AlwaysOpen {
        fn is_authorized(&self, _credential: &str) -> bool {
            true
        }
    }

    #[test]
    fn gate_trait_is_object_safe() {
        let gate: Box<dyn AccessGate> = Box::new(AlwaysOpen);
        assert!(gate.is_authorized("anything"));
    }

    #[test]
    fn access_denied_displays_correctly() {
        assert_eq!(AccessDenied.to_string(), "administrative access denied");
    }
}
