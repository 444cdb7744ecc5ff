//! Pro-rata share calculation.
//!
//! Splits the total trip cost across people in proportion to how many
//! person-slots each booked. The cost per slot keeps full precision;
//! rounding to cents happens independently per reported figure, so the
//! three category shares may differ from the rounded total by a cent or
//! two. That mismatch is accepted display behavior, not something to
//! reconcile away.

use serde::{Deserialize, Serialize};

use crate::domain::booking::BookingRegistry;
use crate::domain::expense::ExpenseEntry;
use crate::domain::foundation::round2;
use crate::domain::trip::TripConfig;

use super::CostBreakdown;

/// One person's computed portion of the trip cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonShare {
    /// Display name (casing of the person's first booking).
    pub name: String,
    /// Person-slots this person booked.
    pub slots_joined: u32,
    /// Rounded rental portion.
    pub rental_share: f64,
    /// Rounded insurance portion.
    pub insurance_share: f64,
    /// Rounded fuel/expense portion.
    pub gas_share: f64,
    /// Rounded total owed. Rounded independently of the three parts.
    pub total_share: f64,
}

/// The full share report, recomputed from scratch on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareReport {
    /// Per-person shares, ordered by first booking appearance.
    pub shares: Vec<PersonShare>,
    /// Categorized total trip cost.
    pub costs: CostBreakdown,
    /// Sum of all categories.
    pub total_trip_cost: f64,
    /// Full-precision cost of one person-slot; zero when nothing is
    /// booked.
    pub cost_per_slot: f64,
}

/// Calculator for pro-rata cost shares.
pub struct ShareCalculator;

impl ShareCalculator {
    /// Computes every person's share of the total trip cost.
    ///
    /// # Edge Cases
    ///
    /// - Zero bookings: empty share list and `cost_per_slot = 0`; the
    ///   totals are still reported. This is the explicit terminal case,
    ///   not an error.
    pub fn compute_shares(
        config: &TripConfig,
        registry: &BookingRegistry,
        expenses: &[ExpenseEntry],
    ) -> ShareReport {
        let costs = CostBreakdown::aggregate(config, expenses);
        let total = costs.total();

        let counts = registry.per_person_slot_counts();
        let total_person_slots: u32 = counts.iter().map(|c| c.count).sum();

        if total_person_slots == 0 {
            return ShareReport {
                shares: Vec::new(),
                costs,
                total_trip_cost: total,
                cost_per_slot: 0.0,
            };
        }

        let cost_per_slot = total / total_person_slots as f64;

        let shares = counts
            .into_iter()
            .map(|person| {
                let ratio = person.count as f64 / total_person_slots as f64;
                PersonShare {
                    name: person.name,
                    slots_joined: person.count,
                    rental_share: round2(costs.rental * ratio),
                    insurance_share: round2(costs.insurance * ratio),
                    gas_share: round2(costs.gas * ratio),
                    total_share: round2(cost_per_slot * person.count as f64),
                }
            })
            .collect();

        ShareReport {
            shares,
            costs,
            total_trip_cost: total,
            cost_per_slot,
        }
    }
}
