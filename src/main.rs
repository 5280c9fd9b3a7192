// SPDX-License-Identifier: MIT
// Copyright 2026 Talent Tracker Contributors

//! Talent-Tracker API Server
//!
//! Serves the weekly talent dashboard: per-talent activities, SNS follower
//! statistics, and goal completion aggregated per ISO week, backed by
//! Supabase with a static fallback dataset when no backend is configured.

use std::sync::Arc;
use talent_tracker::{
    config::Config, db::SupabaseDb, services::DashboardService, week::current_week, AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env();
    tracing::info!(
        port = config.port,
        backend_configured = config.is_backend_configured(),
        week = %current_week(),
        "Starting Talent-Tracker API"
    );

    // Initialize the Supabase client (offline when unconfigured)
    let db = SupabaseDb::new(&config);
    let dashboard = DashboardService::new(db.clone());

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        dashboard,
    });

    // Build router
    let app = talent_tracker::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("talent_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
