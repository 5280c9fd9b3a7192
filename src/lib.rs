// SPDX-License-Identifier: MIT
// Copyright 2026 Talent Tracker Contributors

//! Talent-Tracker: weekly status dashboard for a talent-management roster.
//!
//! This crate provides the backend API that aggregates each talent's weekly
//! activities, SNS follower statistics, and goal completion into dashboard
//! view models, plus the admin write endpoints for entering new records.

pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod models;
pub mod routes;
pub mod services;
pub mod week;

use config::Config;
use db::SupabaseDb;
use services::DashboardService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: SupabaseDb,
    pub dashboard: DashboardService,
}
