//! Monetary rounding helpers.
//!
//! Amounts are plain f64 in a single unspecified currency unit. Full
//! precision is kept through every intermediate computation; rounding to
//! cents happens once, at the reporting boundary.

/// Rounds an amount to two decimal places using half-up rounding.
///
/// Category shares and totals are each rounded independently at report
/// time; the unrounded values are never stored.
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
