// SPDX-License-Identifier: MIT
// Copyright 2026 Talent Tracker Contributors

//! Dashboard read endpoints.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::format::{
    format_follower_count, goal_completion_percent, growth_direction, status_category,
    GrowthDirection, StatusCategory,
};
use crate::models::{Platform, Talent, TalentView, WeeklyGoal};
use crate::week::{current_week, WeekOfYear};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/talents", get(get_talents))
}

#[derive(Deserialize)]
struct DashboardQuery {
    /// ISO week number; defaults to the current week
    week: Option<u32>,
    /// ISO year; must accompany `week`
    year: Option<i32>,
}

/// Dashboard response for one ISO week, with navigation targets.
#[derive(Serialize)]
pub struct DashboardResponse {
    pub week: u32,
    pub year: i32,
    /// Previous week, year rolled backward across the boundary
    pub prev: WeekOfYear,
    /// Next week, year rolled forward across the boundary
    pub next: WeekOfYear,
    pub talents: Vec<DashboardCard>,
}

/// One talent card with raw data and derived display values.
#[derive(Serialize)]
pub struct DashboardCard {
    pub id: i64,
    pub name: String,
    pub avatar_url: Option<String>,
    pub weekly_topic: Option<String>,
    /// Goal completion in 0..=100, 0 when no goal is recorded
    pub goal_percent: u8,
    pub weekly_goal: Option<WeeklyGoal>,
    /// Week-scoped activities, most recent first
    pub activities: Vec<ActivityCard>,
    /// One entry per platform in display order, zeroed when unrecorded
    pub sns: Vec<SnsCard>,
}

#[derive(Serialize)]
pub struct ActivityCard {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub status: String,
    pub status_category: StatusCategory,
    pub date: NaiveDate,
}

#[derive(Serialize)]
pub struct SnsCard {
    pub platform: Platform,
    pub followers: u64,
    pub followers_display: String,
    pub growth: i64,
    pub direction: GrowthDirection,
}

impl From<TalentView> for DashboardCard {
    fn from(view: TalentView) -> Self {
        let goal_percent = goal_completion_percent(view.weekly_goal.as_ref());

        // Every platform gets a card; missing stats render as zero,
        // matching the dashboard's fixed three-column layout.
        let sns = Platform::ALL
            .iter()
            .map(|&platform| {
                let stat = view.sns_stats.iter().find(|s| s.platform == platform);
                let followers = stat.map_or(0, |s| s.followers);
                let growth = stat.map_or(0, |s| s.growth);
                SnsCard {
                    platform,
                    followers,
                    followers_display: format_follower_count(followers),
                    growth,
                    direction: growth_direction(growth),
                }
            })
            .collect();

        let activities = view
            .activities
            .into_iter()
            .map(|a| ActivityCard {
                status_category: status_category(&a.status),
                id: a.id,
                kind: a.kind,
                title: a.title,
                status: a.status,
                date: a.date,
            })
            .collect();

        DashboardCard {
            id: view.id,
            name: view.name,
            avatar_url: view.avatar_url,
            weekly_topic: view.weekly_topic,
            goal_percent,
            weekly_goal: view.weekly_goal,
            activities,
            sns,
        }
    }
}

/// Get the aggregated dashboard for one week (default: this week).
async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>> {
    let week = resolve_week(params)?;

    let views = state.dashboard.build_dashboard(week).await;
    let talents = views.into_iter().map(DashboardCard::from).collect();

    Ok(Json(DashboardResponse {
        week: week.week,
        year: week.year,
        prev: week.prev(),
        next: week.next(),
        talents,
    }))
}

fn resolve_week(params: DashboardQuery) -> Result<WeekOfYear> {
    match (params.week, params.year) {
        (None, None) => Ok(current_week()),
        (Some(week), Some(year)) => {
            if !(1..=53).contains(&week) {
                return Err(AppError::BadRequest("week must be in 1..=53".to_string()));
            }
            Ok(WeekOfYear { week, year })
        }
        _ => Err(AppError::BadRequest(
            "week and year must be provided together".to_string(),
        )),
    }
}

/// Get the talent roster (used by the admin form's talent selector).
async fn get_talents(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Talent>>> {
    let talents = state.db.list_talents().await;
    Ok(Json(talents.data))
}
