// SPDX-License-Identifier: MIT
// Copyright 2026 Talent Tracker Contributors

//! Social-media follower statistics, bucketed by (week, year).

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Tracked SNS platform.
///
/// The canonical wire casing is lowercase; stored rows written by older
/// tooling use capitalized names, so decoding accepts both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[serde(alias = "Instagram")]
    Instagram,
    #[serde(alias = "TikTok", alias = "Tiktok")]
    Tiktok,
    #[serde(alias = "Twitter", alias = "X")]
    Twitter,
}

impl Platform {
    /// All platforms in dashboard display order.
    pub const ALL: [Platform; 3] = [Platform::Instagram, Platform::Tiktok, Platform::Twitter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
            Platform::Twitter => "twitter",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored follower-count record in the `sns_stats` table.
///
/// At most one row per (talent, platform, week, year) is meaningful; the
/// write path upserts on that key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnsStat {
    /// Row id
    pub id: i64,
    /// Owning talent
    pub talent_id: i64,
    pub platform: Platform,
    /// Follower count at the end of the week
    pub followers: u64,
    /// Signed follower delta versus the previous week
    pub growth: i64,
    /// ISO week bucket
    pub week_number: u32,
    /// ISO year of the week bucket
    pub year: i32,
    /// Row creation timestamp (ISO 8601), set by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Input record for recording a week's follower count (admin form path).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewSnsStat {
    pub talent_id: i64,
    pub platform: Platform,
    pub followers: u64,
    pub growth: i64,
    #[validate(range(min = 1, max = 53, message = "week_number must be in 1..=53"))]
    pub week_number: u32,
    pub year: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_decodes_both_casings() {
        let lower: Platform = serde_json::from_str("\"instagram\"").unwrap();
        let capitalized: Platform = serde_json::from_str("\"Instagram\"").unwrap();
        assert_eq!(lower, Platform::Instagram);
        assert_eq!(capitalized, Platform::Instagram);

        let tiktok: Platform = serde_json::from_str("\"TikTok\"").unwrap();
        assert_eq!(tiktok, Platform::Tiktok);
    }

    #[test]
    fn test_platform_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Platform::Instagram).unwrap(),
            "\"instagram\""
        );
        assert_eq!(
            serde_json::to_string(&Platform::Tiktok).unwrap(),
            "\"tiktok\""
        );
    }

    #[test]
    fn test_unknown_platform_is_rejected() {
        let result: Result<Platform, _> = serde_json::from_str("\"myspace\"");
        assert!(result.is_err());
    }
}
