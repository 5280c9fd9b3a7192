// SPDX-License-Identifier: MIT
// Copyright 2026 Talent Tracker Contributors

//! Services module - business logic layer.

pub mod dashboard;

pub use dashboard::DashboardService;
