// SPDX-License-Identifier: MIT
// Copyright 2026 Talent Tracker Contributors

//! Weekly goal model.

use serde::{Deserialize, Serialize};

/// Stored weekly-goal record in the `weekly_goals` table.
///
/// At most one row per (talent, week, year). `completed` is not guaranteed
/// to stay below `total`; display logic clamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyGoal {
    /// Row id
    pub id: i64,
    /// Owning talent
    pub talent_id: i64,
    /// Goals finished this week
    pub completed: u32,
    /// Goals planned this week
    pub total: u32,
    /// ISO week bucket
    pub week_number: u32,
    /// ISO year of the week bucket
    pub year: i32,
    /// Row creation timestamp (ISO 8601), set by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
