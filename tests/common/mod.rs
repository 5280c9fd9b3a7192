// SPDX-License-Identifier: MIT
// Copyright 2026 Talent Tracker Contributors

use std::sync::Arc;
use talent_tracker::config::Config;
use talent_tracker::db::SupabaseDb;
use talent_tracker::routes::create_router;
use talent_tracker::services::DashboardService;
use talent_tracker::AppState;

/// Create a test app with an unconfigured backend (serves fallback data).
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    build_app(Config::default())
}

/// Create a test app whose backend is configured but unreachable, so every
/// backend call fails at the transport level.
#[allow(dead_code)]
pub fn create_unreachable_app() -> (axum::Router, Arc<AppState>) {
    build_app(unreachable_config())
}

/// Config pointing at a port nothing listens on.
#[allow(dead_code)]
pub fn unreachable_config() -> Config {
    Config {
        supabase_url: "http://127.0.0.1:9".to_string(),
        supabase_anon_key: "test-key".to_string(),
        ..Config::default()
    }
}

/// A configured-but-unreachable database client.
#[allow(dead_code)]
pub fn unreachable_db() -> SupabaseDb {
    SupabaseDb::new(&unreachable_config())
}

fn build_app(config: Config) -> (axum::Router, Arc<AppState>) {
    let db = SupabaseDb::new(&config);
    let dashboard = DashboardService::new(db.clone());

    let state = Arc::new(AppState {
        config,
        db,
        dashboard,
    });

    (create_router(state.clone()), state)
}
