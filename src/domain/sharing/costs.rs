//! Categorized trip cost aggregation.

use serde::{Deserialize, Serialize};

use crate::domain::expense::ExpenseEntry;
use crate::domain::trip::TripConfig;

/// Total trip cost, kept per category so shares can report a breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Whole-trip vehicle rental cost.
    pub rental: f64,
    /// Daily insurance rate times trip length.
    pub insurance: f64,
    /// Sum of logged fuel/expense entries.
    pub gas: f64,
}

impl CostBreakdown {
    /// Aggregates the configured costs and logged expenses.
    pub fn aggregate(config: &TripConfig, expenses: &[ExpenseEntry]) -> Self {
        Self {
            rental: config.rental_cost(),
            insurance: config.daily_insurance() * config.total_days() as f64,
            gas: expenses.iter().map(|e| e.amount()).sum(),
        }
    }

    /// Sum of all three categories.
    pub fn total(&self) -> f64 {
        self.rental + self.insurance + self.gas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn config() -> TripConfig {
        TripConfig::from_raw(200.0, 25.0, 3, 5, "2025-07-04T09:00").unwrap()
    }

    fn expense(amount: f64) -> ExpenseEntry {
        let date: NaiveDate = "2025-07-04".parse().unwrap();
        ExpenseEntry::new(amount, date, "gas").unwrap()
    }

    #[test]
    fn aggregates_all_categories() {
        let expenses = vec![expense(30.0), expense(20.0)];
        let costs = CostBreakdown::aggregate(&config(), &expenses);

        assert_eq!(costs.rental, 200.0);
        assert_eq!(costs.insurance, 75.0);
        assert_eq!(costs.gas, 50.0);
        assert_eq!(costs.total(), 325.0);
    }

    #[test]
    fn no_expenses_means_zero_gas() {
        let costs = CostBreakdown::aggregate(&config(), &[]);
        assert_eq!(costs.gas, 0.0);
        assert_eq!(costs.total(), 275.0);
    }
}
