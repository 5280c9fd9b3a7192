// SPDX-License-Identifier: MIT
// Copyright 2026 Talent Tracker Contributors

//! Supabase PostgREST client with typed operations.
//!
//! Reads fail open: when the backend is unconfigured or a request fails for
//! any reason, the matching subset of the static fallback dataset is
//! returned and the outcome is reported through [`Fetched::source`], never
//! as an error. Writes fail loudly, since masking a failed write would tell
//! the operator that data was saved when it was not.

use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::db::{mock, tables};
use crate::error::AppError;
use crate::models::{Activity, NewActivity, NewSnsStat, SnsStat, Talent, TopicUpdate, WeeklyGoal};
use crate::week::WeekOfYear;

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Where the data in a [`Fetched`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Live backend rows
    Live,
    /// Static fallback dataset, with the reason the backend was bypassed
    Fallback(FallbackReason),
}

/// Why a read degraded to fallback data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// Backend URL/key missing or placeholder
    NotConfigured,
    /// Transport-level failure (connect, timeout, TLS)
    Request(String),
    /// Non-success HTTP status from PostgREST
    Status(u16),
    /// Response body was not the expected shape
    Decode(String),
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::NotConfigured => write!(f, "backend not configured"),
            FallbackReason::Request(msg) => write!(f, "request failed: {msg}"),
            FallbackReason::Status(code) => write!(f, "unexpected HTTP status {code}"),
            FallbackReason::Decode(msg) => write!(f, "response decode failed: {msg}"),
        }
    }
}

/// A read result together with its provenance, so callers and tests can
/// distinguish live data from fallback data deterministically.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub data: T,
    pub source: Source,
}

impl<T> Fetched<T> {
    fn live(data: T) -> Self {
        Self {
            data,
            source: Source::Live,
        }
    }

    fn fallback(data: T, reason: FallbackReason) -> Self {
        Self {
            data,
            source: Source::Fallback(reason),
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self.source, Source::Live)
    }
}

/// Supabase database client.
#[derive(Clone)]
pub struct SupabaseDb {
    client: Option<RestClient>,
}

#[derive(Clone)]
struct RestClient {
    http: reqwest::Client,
    /// `{project_url}/rest/v1`
    rest_url: String,
    api_key: String,
}

impl SupabaseDb {
    /// Create a client from configuration.
    ///
    /// An unconfigured backend yields an offline client that serves the
    /// fallback dataset; this is a supported mode, not an error.
    pub fn new(config: &Config) -> Self {
        if !config.is_backend_configured() {
            tracing::info!("Supabase not configured, serving fallback data");
            return Self { client: None };
        }

        let http = match reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build() {
            Ok(http) => http,
            Err(e) => {
                tracing::error!(error = %e, "Failed to build HTTP client, serving fallback data");
                return Self { client: None };
            }
        };

        let rest_url = format!("{}/rest/v1", config.supabase_url.trim_end_matches('/'));
        tracing::info!(url = %config.supabase_url, "Supabase client initialized");

        Self {
            client: Some(RestClient {
                http,
                rest_url,
                api_key: config.supabase_anon_key.clone(),
            }),
        }
    }

    /// Create an offline client for testing (always serves fallback data).
    pub fn new_offline() -> Self {
        Self { client: None }
    }

    /// Whether a live backend connection is configured.
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    // ─── Reads (fail open) ───────────────────────────────────────

    /// All talents, ordered by name ascending.
    pub async fn list_talents(&self) -> Fetched<Vec<Talent>> {
        let query = vec![
            ("select", "*".to_string()),
            ("order", "name.asc".to_string()),
        ];

        match self.fetch_rows(tables::TALENTS, query).await {
            Ok(rows) => Fetched::live(rows),
            Err(reason) => {
                tracing::warn!(reason = %reason, "Using fallback talents");
                Fetched::fallback(mock::talents(), reason)
            }
        }
    }

    /// A talent's activities, optionally scoped to one ISO week, most
    /// recent first.
    pub async fn list_activities(
        &self,
        talent_id: i64,
        week: Option<WeekOfYear>,
    ) -> Fetched<Vec<Activity>> {
        let mut query = vec![
            ("select", "*".to_string()),
            ("talent_id", format!("eq.{talent_id}")),
            ("order", "date.desc".to_string()),
        ];
        push_week_filter(&mut query, week);

        match self.fetch_rows(tables::ACTIVITIES, query).await {
            Ok(rows) => Fetched::live(rows),
            Err(reason) => {
                tracing::warn!(talent_id, reason = %reason, "Using fallback activities");
                Fetched::fallback(mock::activities_for(talent_id), reason)
            }
        }
    }

    /// A talent's SNS stats, optionally scoped to one ISO week.
    pub async fn list_sns_stats(
        &self,
        talent_id: i64,
        week: Option<WeekOfYear>,
    ) -> Fetched<Vec<SnsStat>> {
        let mut query = vec![
            ("select", "*".to_string()),
            ("talent_id", format!("eq.{talent_id}")),
        ];
        push_week_filter(&mut query, week);

        match self.fetch_rows(tables::SNS_STATS, query).await {
            Ok(rows) => Fetched::live(rows),
            Err(reason) => {
                tracing::warn!(talent_id, reason = %reason, "Using fallback SNS stats");
                Fetched::fallback(mock::sns_stats_for(talent_id), reason)
            }
        }
    }

    /// A talent's weekly goal, optionally scoped to one ISO week.
    ///
    /// Zero live rows is an absent goal, not a failure; only request-level
    /// errors fall back to the mock lookup.
    pub async fn get_weekly_goal(
        &self,
        talent_id: i64,
        week: Option<WeekOfYear>,
    ) -> Fetched<Option<WeeklyGoal>> {
        let mut query = vec![
            ("select", "*".to_string()),
            ("talent_id", format!("eq.{talent_id}")),
            ("limit", "1".to_string()),
        ];
        push_week_filter(&mut query, week);

        match self.fetch_rows(tables::WEEKLY_GOALS, query).await {
            Ok(rows) => Fetched::live(rows.into_iter().next()),
            Err(reason) => {
                tracing::warn!(talent_id, reason = %reason, "Using fallback weekly goal");
                Fetched::fallback(mock::weekly_goal_for(talent_id), reason)
            }
        }
    }

    // ─── Writes (fail loudly) ────────────────────────────────────

    /// Append a new activity row.
    pub async fn insert_activity(&self, input: &NewActivity) -> Result<(), AppError> {
        let client = self.require_client()?;
        let response = client
            .post(tables::ACTIVITIES)
            .header("Prefer", "return=minimal")
            .json(input)
            .send()
            .await
            .map_err(|e| AppError::Supabase(format!("Insert request failed: {e}")))?;

        check_write(response).await?;
        tracing::info!(talent_id = input.talent_id, "Activity recorded");
        Ok(())
    }

    /// Record a week's follower count, replacing any existing row for the
    /// same (talent, platform, week, year).
    pub async fn upsert_sns_stat(&self, input: &NewSnsStat) -> Result<(), AppError> {
        let client = self.require_client()?;
        let response = client
            .post(tables::SNS_STATS)
            .query(&[("on_conflict", "talent_id,platform,week_number,year")])
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(input)
            .send()
            .await
            .map_err(|e| AppError::Supabase(format!("Upsert request failed: {e}")))?;

        check_write(response).await?;
        tracing::info!(
            talent_id = input.talent_id,
            platform = %input.platform,
            "SNS stat recorded"
        );
        Ok(())
    }

    /// Update a talent's weekly topic.
    pub async fn update_weekly_topic(
        &self,
        talent_id: i64,
        update: &TopicUpdate,
    ) -> Result<(), AppError> {
        let client = self.require_client()?;
        let response = client
            .patch(tables::TALENTS)
            .query(&[("id", format!("eq.{talent_id}"))])
            .header("Prefer", "return=minimal")
            .json(update)
            .send()
            .await
            .map_err(|e| AppError::Supabase(format!("Update request failed: {e}")))?;

        check_write(response).await?;
        tracing::info!(talent_id, "Weekly topic updated");
        Ok(())
    }

    // ─── Helpers ─────────────────────────────────────────────────

    fn require_client(&self) -> Result<&RestClient, AppError> {
        self.client.as_ref().ok_or(AppError::NotConfigured)
    }

    /// Fetch and decode rows from one table.
    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        query: Vec<(&str, String)>,
    ) -> Result<Vec<T>, FallbackReason> {
        let client = match &self.client {
            Some(client) => client,
            None => return Err(FallbackReason::NotConfigured),
        };

        let response = client
            .get(table)
            .query(&query)
            .send()
            .await
            .map_err(|e| FallbackReason::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FallbackReason::Status(status.as_u16()));
        }

        let rows: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| FallbackReason::Decode(e.to_string()))?;

        Ok(decode_rows(table, rows))
    }
}

impl RestClient {
    fn get(&self, table: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::GET, table)
    }

    fn post(&self, table: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::POST, table)
    }

    fn patch(&self, table: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::PATCH, table)
    }

    fn request(&self, method: reqwest::Method, table: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, format!("{}/{}", self.rest_url, table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

/// Decode rows one at a time so a single malformed element cannot poison a
/// whole page; bad rows are logged and skipped.
fn decode_rows<T: DeserializeOwned>(table: &str, rows: Vec<serde_json::Value>) -> Vec<T> {
    rows.into_iter()
        .filter_map(|row| match serde_json::from_value(row) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!(table, error = %e, "Skipping malformed row");
                None
            }
        })
        .collect()
}

/// Surface a non-success write response as an error.
async fn check_write(response: reqwest::Response) -> Result<(), AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    Err(AppError::Supabase(format!("HTTP {status}: {body}")))
}

fn push_week_filter(query: &mut Vec<(&str, String)>, week: Option<WeekOfYear>) {
    if let Some(week) = week {
        query.push(("week_number", format!("eq.{}", week.week)));
        query.push(("year", format!("eq.{}", week.year)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_rows_skips_malformed() {
        let rows = vec![
            json!({"id": 1, "talent_id": 1, "type": "撮影", "title": "A", "status": "完了", "date": "2024-01-08"}),
            json!({"id": "not-a-number", "talent_id": 1}),
            json!({"id": 2, "talent_id": 1, "type": "イベント", "title": "B", "status": "進行中", "date": "2024-01-09"}),
        ];

        let decoded: Vec<Activity> = decode_rows(tables::ACTIVITIES, rows);

        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].id, 1);
        assert_eq!(decoded[1].id, 2);
    }

    #[test]
    fn test_decode_rows_accepts_capitalized_platform() {
        let rows = vec![json!({
            "id": 1, "talent_id": 1, "platform": "Instagram",
            "followers": 25000, "growth": 500, "week_number": 3, "year": 2024
        })];

        let decoded: Vec<SnsStat> = decode_rows(tables::SNS_STATS, rows);

        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].platform, crate::models::Platform::Instagram);
    }

    #[tokio::test]
    async fn test_offline_reads_serve_fallback() {
        let db = SupabaseDb::new_offline();

        let talents = db.list_talents().await;
        assert_eq!(
            talents.source,
            Source::Fallback(FallbackReason::NotConfigured)
        );
        assert!(!talents.data.is_empty());

        let activities = db.list_activities(1, None).await;
        assert!(!activities.is_live());
        assert!(activities.data.iter().all(|a| a.talent_id == 1));
    }

    #[tokio::test]
    async fn test_offline_writes_are_rejected() {
        let db = SupabaseDb::new_offline();
        let input = NewActivity {
            talent_id: 1,
            kind: "撮影".to_string(),
            title: "テスト".to_string(),
            status: "完了".to_string(),
            date: chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };

        let result = db.insert_activity(&input).await;
        assert!(matches!(result, Err(AppError::NotConfigured)));
    }
}
