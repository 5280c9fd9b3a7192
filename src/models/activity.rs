// SPDX-License-Identifier: MIT
// Copyright 2026 Talent Tracker Contributors

//! Talent activity model (shoots, auditions, lessons, events).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Stored activity record in the `activities` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Row id
    pub id: i64,
    /// Owning talent
    pub talent_id: i64,
    /// Activity category ("撮影", "オーディション", ...). The column is
    /// named `type`, which is reserved in Rust.
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-text status from a small vocabulary ("完了", "進行中", ...)
    pub status: String,
    /// Activity title
    pub title: String,
    /// Calendar date of the activity
    pub date: NaiveDate,
    /// Row creation timestamp (ISO 8601), set by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Input record for appending a new activity (admin form path).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewActivity {
    pub talent_id: i64,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type must not be empty"))]
    pub kind: String,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "status must not be empty"))]
    pub status: String,
    pub date: NaiveDate,
}
