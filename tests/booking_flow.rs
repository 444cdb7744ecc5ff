//! Integration tests for the booking and cost-splitting flow.
//!
//! These tests verify the end-to-end path:
//! 1. A trip is configured and its schedule expanded
//! 2. People book seats, a driver is assigned, expenses are logged
//! 3. The share report splits the total pro rata and rounds per entry
//! 4. Administrative updates go through the shared-secret gate

use std::sync::Arc;

use chrono::NaiveDate;

use tripsplit::adapters::auth::SharedSecretGate;
use tripsplit::application::{
    ExpenseAdminError, ManageExpensesHandler, PlannerError, TripConfigUpdate, TripPlanner,
    UpdateConfigError, UpdateTripConfigHandler,
};
use tripsplit::domain::booking::BookingError;
use tripsplit::domain::trip::{TimeSlot, TripConfig};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn three_day_trip() -> TripPlanner {
    // Morning start: all 6 slots exist
    let config = TripConfig::from_raw(200.0, 25.0, 3, 5, "2025-07-04T09:00").unwrap();
    TripPlanner::new(config)
}

#[test]
fn full_trip_lifecycle() {
    let mut planner = three_day_trip();
    let day1 = date("2025-07-04");
    let day2 = date("2025-07-05");

    let alice_am = planner.join("Alice", day1, TimeSlot::Morning).unwrap();
    planner.join("Bob", day1, TimeSlot::Morning).unwrap();
    planner.join("Alice", day2, TimeSlot::Afternoon).unwrap();
    planner.join("Carol", day2, TimeSlot::Afternoon).unwrap();

    planner
        .assign_driver(day1, TimeSlot::Morning, Some(alice_am))
        .unwrap();

    planner.add_expense(48.0, day1, "Shell").unwrap();
    planner.add_expense(52.0, day2, "Costco Gas").unwrap();

    // rental 200 + insurance 3*25 + gas 100 = 375 over 4 slots
    let report = planner.compute_shares();
    assert_eq!(report.total_trip_cost, 375.0);
    assert_eq!(report.cost_per_slot, 375.0 / 4.0);

    assert_eq!(report.shares.len(), 3);
    assert_eq!(report.shares[0].name, "Alice");
    assert_eq!(report.shares[0].slots_joined, 2);
    assert_eq!(report.shares[0].total_share, 187.50);
    assert_eq!(report.shares[1].name, "Bob");
    assert_eq!(report.shares[1].total_share, 93.75);
    assert_eq!(report.shares[2].name, "Carol");
    assert_eq!(report.shares[2].total_share, 93.75);

    // Day 1 afternoon has nobody: not listed as missing a driver
    let missing: Vec<String> = planner
        .slots_missing_driver()
        .iter()
        .map(|k| k.to_string())
        .collect();
    assert_eq!(missing.len(), 1);
    assert!(missing[0].contains("2025-07-05"));
}

#[test]
fn capacity_and_uniqueness_are_enforced() {
    let mut planner = three_day_trip();
    let day1 = date("2025-07-04");

    for name in ["Alice", "Bob", "Carol", "Dan", "Eve"] {
        planner.join(name, day1, TimeSlot::Morning).unwrap();
    }

    let err = planner.join("Frank", day1, TimeSlot::Morning).unwrap_err();
    assert!(matches!(
        err,
        PlannerError::Booking(BookingError::SlotFull { capacity: 5 })
    ));

    // Same person in a different casing is still a duplicate elsewhere
    planner.join("Grace", day1, TimeSlot::Afternoon).unwrap();
    let err = planner
        .join("  GRACE ", day1, TimeSlot::Afternoon)
        .unwrap_err();
    assert!(matches!(
        err,
        PlannerError::Booking(BookingError::DuplicatePerson { .. })
    ));
}

#[test]
fn cancellation_frees_the_seat() {
    let mut planner = three_day_trip();
    let day1 = date("2025-07-04");

    let ids: Vec<_> = ["Alice", "Bob", "Carol", "Dan", "Eve"]
        .iter()
        .map(|name| planner.join(name, day1, TimeSlot::Morning).unwrap())
        .collect();
    assert!(planner.join("Frank", day1, TimeSlot::Morning).is_err());

    planner.cancel(ids[2]);
    planner.join("Frank", day1, TimeSlot::Morning).unwrap();
    assert_eq!(planner.list_by_slot(day1, TimeSlot::Morning).len(), 5);
}

#[test]
fn driver_reassignment_keeps_one_driver_per_slot() {
    let mut planner = three_day_trip();
    let day1 = date("2025-07-04");

    let alice = planner.join("Alice", day1, TimeSlot::Morning).unwrap();
    let bob = planner.join("Bob", day1, TimeSlot::Morning).unwrap();

    planner
        .assign_driver(day1, TimeSlot::Morning, Some(alice))
        .unwrap();
    planner
        .assign_driver(day1, TimeSlot::Morning, Some(bob))
        .unwrap();

    let drivers: Vec<_> = planner
        .list_by_slot(day1, TimeSlot::Morning)
        .into_iter()
        .filter(|r| r.is_driver())
        .map(|r| r.id())
        .collect();
    assert_eq!(drivers, vec![bob]);

    planner.assign_driver(day1, TimeSlot::Morning, None).unwrap();
    assert!(planner
        .list_by_slot(day1, TimeSlot::Morning)
        .iter()
        .all(|r| !r.is_driver()));
}

#[test]
fn afternoon_start_drops_the_first_morning() {
    let config = TripConfig::from_raw(200.0, 25.0, 2, 5, "2025-07-04T14:00").unwrap();
    let mut planner = TripPlanner::new(config);

    let err = planner
        .join("Alice", date("2025-07-04"), TimeSlot::Morning)
        .unwrap_err();
    assert!(matches!(
        err,
        PlannerError::Booking(BookingError::SlotNotFound { .. })
    ));

    planner
        .join("Alice", date("2025-07-04"), TimeSlot::Afternoon)
        .unwrap();
    planner
        .join("Alice", date("2025-07-05"), TimeSlot::Morning)
        .unwrap();
}

#[test]
fn zero_bookings_yield_an_empty_report_with_totals() {
    let mut planner = three_day_trip();
    planner.add_expense(40.0, date("2025-07-04"), "Shell").unwrap();

    let report = planner.compute_shares();
    assert!(report.shares.is_empty());
    assert_eq!(report.total_trip_cost, 315.0);
    assert_eq!(report.cost_per_slot, 0.0);
}

#[test]
fn gated_config_update_end_to_end() {
    let mut planner = three_day_trip();
    planner
        .join("Alice", date("2025-07-06"), TimeSlot::Morning)
        .unwrap();

    let handler = UpdateTripConfigHandler::new(Arc::new(SharedSecretGate::new("hunter2")));
    let update = TripConfigUpdate {
        rental_cost: 260.0,
        daily_insurance: 25.0,
        total_days: 2,
        seats: 7,
        start: "2025-07-04T09:00".to_string(),
        payment_handle: None,
    };

    let err = handler
        .handle("wrong", &mut planner, update.clone())
        .unwrap_err();
    assert!(matches!(err, UpdateConfigError::Denied(_)));
    assert_eq!(planner.config().capacity(), 5);

    handler.handle("hunter2", &mut planner, update).unwrap();
    assert_eq!(planner.config().capacity(), 7);

    // The out-of-range reservation survives and still counts
    let counts = planner.per_person_slot_counts();
    assert_eq!(counts[0].name, "Alice");
    assert_eq!(counts[0].count, 1);
}

#[test]
fn expense_administration_requires_the_credential() {
    let mut planner = three_day_trip();
    let expenses = ManageExpensesHandler::new(Arc::new(SharedSecretGate::new("hunter2")));

    let err = expenses
        .add_expense("wrong", &mut planner, 48.0, date("2025-07-04"), "Shell")
        .unwrap_err();
    assert!(matches!(err, ExpenseAdminError::Denied(_)));
    assert!(planner.expenses().is_empty());

    let id = expenses
        .add_expense("hunter2", &mut planner, 48.0, date("2025-07-04"), "Shell")
        .unwrap();
    assert_eq!(planner.compute_shares().total_trip_cost, 323.0);

    expenses
        .remove_expense("hunter2", &mut planner, id)
        .unwrap();
    assert_eq!(planner.compute_shares().total_trip_cost, 275.0);
}
