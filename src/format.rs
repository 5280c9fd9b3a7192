// SPDX-License-Identifier: MIT
// Copyright 2026 Talent Tracker Contributors

//! Display-value derivation for dashboard cards.

use serde::Serialize;

use crate::models::WeeklyGoal;

/// Direction of a follower-count delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthDirection {
    Up,
    Down,
    Flat,
}

/// Coarse category for an activity status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    Success,
    InProgress,
    Pending,
    Failure,
    Unknown,
}

/// Compact follower-count rendering: 10,000 and above use the 万
/// (ten-thousands) unit with one decimal, smaller counts get thousands
/// separators.
pub fn format_follower_count(n: u64) -> String {
    if n >= 10_000 {
        format!("{:.1}万", n as f64 / 10_000.0)
    } else {
        group_thousands(n)
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Goal completion as a whole percentage in 0..=100.
///
/// Guards division by zero, and clamps because `completed` may exceed
/// `total` in stored data.
pub fn goal_completion_percent(goal: Option<&WeeklyGoal>) -> u8 {
    match goal {
        Some(g) if g.total > 0 => {
            let pct = (f64::from(g.completed) / f64::from(g.total) * 100.0).round();
            pct.min(100.0) as u8
        }
        _ => 0,
    }
}

/// Classify a follower delta for the trend indicator.
pub fn growth_direction(delta: i64) -> GrowthDirection {
    match delta.cmp(&0) {
        std::cmp::Ordering::Greater => GrowthDirection::Up,
        std::cmp::Ordering::Less => GrowthDirection::Down,
        std::cmp::Ordering::Equal => GrowthDirection::Flat,
    }
}

/// Map a status string onto a badge category.
///
/// The stored vocabulary is Japanese; English equivalents are accepted
/// case-insensitively. Unrecognized values map to `Unknown` rather than
/// erroring.
pub fn status_category(status: &str) -> StatusCategory {
    match status.trim().to_lowercase().as_str() {
        "完了" | "合格" | "completed" | "passed" => StatusCategory::Success,
        "進行中" | "in progress" => StatusCategory::InProgress,
        "待機中" | "waiting" => StatusCategory::Pending,
        "キャンセル" | "不合格" | "cancelled" | "failed" => StatusCategory::Failure,
        _ => StatusCategory::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(completed: u32, total: u32) -> WeeklyGoal {
        WeeklyGoal {
            id: 1,
            talent_id: 1,
            completed,
            total,
            week_number: 3,
            year: 2024,
            created_at: None,
        }
    }

    #[test]
    fn test_follower_count_below_ten_thousand() {
        assert_eq!(format_follower_count(0), "0");
        assert_eq!(format_follower_count(513), "513");
        assert_eq!(format_follower_count(5611), "5,611");
        assert_eq!(format_follower_count(9999), "9,999");
    }

    #[test]
    fn test_follower_count_compact_unit() {
        assert_eq!(format_follower_count(10_000), "1.0万");
        assert_eq!(format_follower_count(42_900), "4.3万");
        assert_eq!(format_follower_count(120_000), "12.0万");
        assert_eq!(format_follower_count(204_000), "20.4万");
    }

    #[test]
    fn test_goal_percent_guards_zero_total() {
        assert_eq!(goal_completion_percent(Some(&goal(0, 0))), 0);
        assert_eq!(goal_completion_percent(Some(&goal(3, 0))), 0);
        assert_eq!(goal_completion_percent(None), 0);
    }

    #[test]
    fn test_goal_percent_rounds() {
        assert_eq!(goal_completion_percent(Some(&goal(3, 4))), 75);
        assert_eq!(goal_completion_percent(Some(&goal(5, 6))), 83);
        assert_eq!(goal_completion_percent(Some(&goal(1, 3))), 33);
    }

    #[test]
    fn test_goal_percent_clamps_overachievement() {
        assert_eq!(goal_completion_percent(Some(&goal(7, 4))), 100);
    }

    #[test]
    fn test_growth_direction() {
        assert_eq!(growth_direction(500), GrowthDirection::Up);
        assert_eq!(growth_direction(-12), GrowthDirection::Down);
        assert_eq!(growth_direction(0), GrowthDirection::Flat);
    }

    #[test]
    fn test_status_category_japanese_vocabulary() {
        assert_eq!(status_category("完了"), StatusCategory::Success);
        assert_eq!(status_category("合格"), StatusCategory::Success);
        assert_eq!(status_category("進行中"), StatusCategory::InProgress);
        assert_eq!(status_category("待機中"), StatusCategory::Pending);
        assert_eq!(status_category("キャンセル"), StatusCategory::Failure);
        assert_eq!(status_category("不合格"), StatusCategory::Failure);
    }

    #[test]
    fn test_status_category_english_case_insensitive() {
        assert_eq!(status_category("Completed"), StatusCategory::Success);
        assert_eq!(status_category("IN PROGRESS"), StatusCategory::InProgress);
        assert_eq!(status_category("waiting"), StatusCategory::Pending);
        assert_eq!(status_category("Cancelled"), StatusCategory::Failure);
    }

    #[test]
    fn test_status_category_unknown_never_errors() {
        assert_eq!(status_category(""), StatusCategory::Unknown);
        assert_eq!(status_category("保留"), StatusCategory::Unknown);
        assert_eq!(status_category("???"), StatusCategory::Unknown);
    }
}
