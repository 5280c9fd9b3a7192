// SPDX-License-Identifier: MIT
// Copyright 2026 Talent Tracker Contributors

//! Admin write endpoints (activity / SNS stat / weekly topic entry).
//!
//! Unlike the read path, these surface failures: a rejected write must be
//! visible to the operator, never silently degraded.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{post, put},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{NewActivity, NewSnsStat, TopicUpdate};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activities", post(record_activity))
        .route("/api/sns-stats", post(record_sns_stat))
        .route("/api/talents/{id}/topic", put(update_topic))
}

/// Response for a successful write.
#[derive(Serialize)]
pub struct WriteResponse {
    pub success: bool,
    pub message: String,
}

/// Append a new activity row.
async fn record_activity(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewActivity>,
) -> Result<(StatusCode, Json<WriteResponse>)> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    state.db.insert_activity(&input).await?;

    Ok((
        StatusCode::CREATED,
        Json(WriteResponse {
            success: true,
            message: "活動情報を更新しました".to_string(),
        }),
    ))
}

/// Record (or replace) a week's follower count for one platform.
async fn record_sns_stat(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewSnsStat>,
) -> Result<(StatusCode, Json<WriteResponse>)> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    state.db.upsert_sns_stat(&input).await?;

    Ok((
        StatusCode::CREATED,
        Json(WriteResponse {
            success: true,
            message: "SNS統計を更新しました".to_string(),
        }),
    ))
}

/// Update a talent's weekly topic.
async fn update_topic(
    State(state): State<Arc<AppState>>,
    Path(talent_id): Path<i64>,
    Json(input): Json<TopicUpdate>,
) -> Result<Json<WriteResponse>> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    state.db.update_weekly_topic(talent_id, &input).await?;

    Ok(Json(WriteResponse {
        success: true,
        message: "週間トピックを更新しました".to_string(),
    }))
}
