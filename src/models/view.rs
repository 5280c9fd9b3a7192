// SPDX-License-Identifier: MIT
// Copyright 2026 Talent Tracker Contributors

//! Derived per-request aggregate of a talent with its week-scoped children.

use serde::Serialize;

use crate::models::{Activity, SnsStat, Talent, WeeklyGoal};

/// A talent merged with its activities, SNS stats, and weekly goal for one
/// (week, year) window. Built fresh on every aggregation call and discarded
/// after rendering; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct TalentView {
    pub id: i64,
    pub name: String,
    pub avatar_url: Option<String>,
    pub weekly_topic: Option<String>,
    /// Week-scoped activities, most recent first
    pub activities: Vec<Activity>,
    pub sns_stats: Vec<SnsStat>,
    pub weekly_goal: Option<WeeklyGoal>,
}

impl TalentView {
    /// A view with no child data, used when a talent's fetch group fails.
    pub fn bare(talent: Talent) -> Self {
        Self {
            id: talent.id,
            name: talent.name,
            avatar_url: talent.avatar_url,
            weekly_topic: talent.weekly_topic,
            activities: Vec::new(),
            sns_stats: Vec::new(),
            weekly_goal: None,
        }
    }
}
