//! Demo binary: sets up a short trip, books a few seats, logs gas
//! expenses and prints the resulting share report.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use tripsplit::adapters::ai::{GeminiClient, GeminiConfig};
use tripsplit::adapters::auth::SharedSecretGate;
use tripsplit::application::{
    ManageExpensesHandler, TripAdviceHandler, TripPlanner, FALLBACK_ADVICE,
};
use tripsplit::config::AppConfig;
use tripsplit::domain::trip::{TimeSlot, TripConfig};
use tripsplit::ports::AdviceRequest;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let app_config = AppConfig::load()?;
    app_config.validate()?;

    let trip = TripConfig::from_raw(200.0, 25.0, 3, 5, "2025-07-04T09:00")?
        .with_payment_handle("zelle:555-0100");
    let mut planner = TripPlanner::new(trip);

    let start = planner.config().start().date();
    planner.join("Alice", start, TimeSlot::Morning)?;
    planner.join("Bob", start, TimeSlot::Morning)?;
    let alice_pm = planner.join("Alice", start, TimeSlot::Afternoon)?;
    planner.assign_driver(start, TimeSlot::Afternoon, Some(alice_pm))?;

    let admin_password = app_config.gate.admin_password.clone();
    let expenses = ManageExpensesHandler::new(Arc::new(SharedSecretGate::new(admin_password.clone())));
    expenses.add_expense(&admin_password, &mut planner, 48.20, start, "Shell")?;
    expenses.add_expense(&admin_password, &mut planner, 31.75, start, "Costco Gas")?;

    let report = planner.compute_shares();
    println!(
        "Trip total ${:.2} across {} booked slots (${:.4}/slot)",
        report.total_trip_cost,
        report.shares.iter().map(|s| s.slots_joined).sum::<u32>(),
        report.cost_per_slot,
    );
    for share in &report.shares {
        println!(
            "  {}: {} slot(s) -> rental ${:.2} + insurance ${:.2} + gas ${:.2} = ${:.2}",
            share.name,
            share.slots_joined,
            share.rental_share,
            share.insurance_share,
            share.gas_share,
            share.total_share,
        );
    }
    for key in planner.slots_missing_driver() {
        println!("  still needs a driver: {key}");
    }

    let advice = match app_config.ai.gemini_api_key.as_deref() {
        Some(key) if app_config.ai.has_gemini() => {
            let gemini = GeminiConfig::new(key)
                .with_model(app_config.ai.model.clone())
                .with_timeout(app_config.ai.timeout());
            let handler = TripAdviceHandler::new(Arc::new(GeminiClient::new(gemini)));
            handler
                .handle(AdviceRequest::new(
                    report.total_trip_cost,
                    report.shares.len(),
                ))
                .await
        }
        _ => FALLBACK_ADVICE.to_string(),
    };
    println!("Tip: {advice}");

    Ok(())
}
