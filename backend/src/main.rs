//! Clinic Manager dashboard
//!
//! Read-only terminal counterpart of the client dashboard: loads the
//! persisted snapshot and logs the fleet statistics, per-client record
//! counts, the recent weight series, and each client's weight trend.

use anyhow::Result;
use clinic_manager_backend::{config, persistence::JsonFileStore, stats, store::ClientStore};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let config = config::AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        snapshot = %config.storage.path,
        "Starting Clinic Manager dashboard"
    );

    let snapshot = Arc::new(JsonFileStore::new(&config.storage.path));
    let store = ClientStore::open(snapshot).await?;
    let clients = store.list();

    let fleet = stats::fleet_stats(clients);
    info!(
        clients = fleet.total_clients,
        weight_entries = fleet.total_weight_entries,
        medications = fleet.total_medications,
        diets = fleet.total_diets,
        trainings = fleet.total_trainings,
        average_latest_weight = %format!("{:.1} kg", fleet.average_latest_weight),
        "Fleet statistics"
    );

    for totals in stats::category_totals(clients) {
        info!(category = %totals.category, count = totals.count, "Category totals");
    }

    for counts in stats::record_counts_per_client(clients) {
        info!(
            client = %counts.client,
            weights = counts.weights,
            trainings = counts.trainings,
            diets = counts.diets,
            "Records per client"
        );
    }

    for point in stats::recent_weight_series(clients) {
        info!(date = %point.date, weight = point.weight, client = %point.client, "Weight series");
    }

    for client in clients {
        if let Some(trend) = stats::weight_trend(client) {
            info!(
                client = %client.name,
                direction = ?trend.direction,
                magnitude = %format!("{:.1} kg", trend.magnitude),
                "Weight trend"
            );
        }
    }

    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "clinic_manager=info,clinic_manager_backend=info".into()
        } else {
            "clinic_manager=debug,clinic_manager_backend=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        // Pretty logging for development
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
