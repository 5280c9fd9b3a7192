// SPDX-License-Identifier: MIT
// Copyright 2026 Talent Tracker Contributors

//! Talent roster model.

use serde::{Deserialize, Serialize};

/// A managed talent (actor/artist) as stored in the `talents` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Talent {
    /// Row id (also used for child-table foreign keys)
    pub id: i64,
    /// Display name
    pub name: String,
    /// Avatar image reference, if any
    pub avatar_url: Option<String>,
    /// Free-text topic highlighted for the current week
    #[serde(default)]
    pub weekly_topic: Option<String>,
    /// Row creation timestamp (ISO 8601), set by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Weekly-topic update payload for a talent.
#[derive(Debug, Clone, Serialize, Deserialize, validator::Validate)]
pub struct TopicUpdate {
    #[validate(length(min = 1, message = "weekly_topic must not be empty"))]
    pub weekly_topic: String,
}
