// SPDX-License-Identifier: MIT
// Copyright 2026 Talent Tracker Contributors

//! Static fallback dataset.
//!
//! Served whenever the backend is unconfigured or a read fails, so the
//! dashboard always has something to render. The follower/goal buckets are
//! stamped with the current ISO week so they show up in the default view.

use chrono::NaiveDate;

use crate::models::{Activity, Platform, SnsStat, Talent, WeeklyGoal};
use crate::week::current_week;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("static mock date is valid")
}

fn talent(id: i64, name: &str, avatar_url: Option<&str>, weekly_topic: &str) -> Talent {
    Talent {
        id,
        name: name.to_string(),
        avatar_url: avatar_url.map(String::from),
        weekly_topic: Some(weekly_topic.to_string()),
        created_at: None,
    }
}

fn activity(
    id: i64,
    talent_id: i64,
    kind: &str,
    title: &str,
    status: &str,
    d: NaiveDate,
) -> Activity {
    Activity {
        id,
        talent_id,
        kind: kind.to_string(),
        status: status.to_string(),
        title: title.to_string(),
        date: d,
        created_at: None,
    }
}

fn sns_stat(id: i64, talent_id: i64, platform: Platform, followers: u64) -> SnsStat {
    let week = current_week();
    SnsStat {
        id,
        talent_id,
        platform,
        followers,
        growth: 0,
        week_number: week.week,
        year: week.year,
        created_at: None,
    }
}

fn weekly_goal(id: i64, talent_id: i64, completed: u32, total: u32) -> WeeklyGoal {
    let week = current_week();
    WeeklyGoal {
        id,
        talent_id,
        completed,
        total,
        week_number: week.week,
        year: week.year,
        created_at: None,
    }
}

/// The full fallback roster, name ascending.
pub fn talents() -> Vec<Talent> {
    let mut list = vec![
        talent(1, "中塚智", None, "新曲「夢の先へ」リリース決定"),
        talent(2, "五十嵐諒", None, "ファッション誌の表紙に初登場"),
        talent(3, "吉川慶", None, "ドラマ「青い空」出演決定"),
        talent(
            4,
            "島田和奏",
            Some("/images/shimada-wakana.jpg"),
            "初のソロコンサート開催発表",
        ),
        talent(6, "吉富千桜", None, "新CM契約獲得"),
        talent(7, "谷口彩菜", None, "海外ファッションショー出演決定"),
    ];
    list.sort_by(|a, b| a.name.cmp(&b.name));
    list
}

/// Fallback activities for one talent, most recent first.
pub fn activities_for(talent_id: i64) -> Vec<Activity> {
    let mut list: Vec<Activity> = all_activities()
        .into_iter()
        .filter(|a| a.talent_id == talent_id)
        .collect();
    list.sort_by(|a, b| b.date.cmp(&a.date));
    list
}

/// Fallback SNS stats for one talent.
pub fn sns_stats_for(talent_id: i64) -> Vec<SnsStat> {
    all_sns_stats()
        .into_iter()
        .filter(|s| s.talent_id == talent_id)
        .collect()
}

/// Fallback weekly goal for one talent, if any.
pub fn weekly_goal_for(talent_id: i64) -> Option<WeeklyGoal> {
    all_weekly_goals()
        .into_iter()
        .find(|g| g.talent_id == talent_id)
}

fn all_activities() -> Vec<Activity> {
    vec![
        activity(1, 1, "撮影", "ファッション雑誌「VOGUE」", "完了", date(2024, 1, 8)),
        activity(2, 1, "オーディション", "ドラマ「青春物語」主演", "合格", date(2024, 1, 10)),
        activity(3, 2, "撮影", "CM「爽やかドリンク」", "完了", date(2024, 1, 9)),
        activity(4, 2, "オーディション", "映画「夏の記憶」", "待機中", date(2024, 1, 11)),
        activity(5, 3, "撮影", "MV「桜の季節」", "進行中", date(2024, 1, 12)),
        activity(6, 3, "オーディション", "アニメ声優「魔法少女」", "合格", date(2024, 1, 7)),
        activity(7, 4, "撮影", "グラビア撮影", "完了", date(2024, 1, 13)),
        activity(9, 6, "撮影", "ドラマ「恋愛物語」", "進行中", date(2024, 1, 14)),
        activity(10, 7, "オーディション", "映画「アクション」", "待機中", date(2024, 1, 12)),
    ]
}

fn all_sns_stats() -> Vec<SnsStat> {
    vec![
        sns_stat(1, 1, Platform::Instagram, 5_611),
        sns_stat(2, 1, Platform::Tiktok, 120_000),
        sns_stat(3, 1, Platform::Twitter, 1_308),
        sns_stat(4, 2, Platform::Instagram, 513),
        sns_stat(5, 2, Platform::Tiktok, 85_000),
        sns_stat(6, 2, Platform::Twitter, 540),
        sns_stat(7, 3, Platform::Instagram, 67_000),
        sns_stat(8, 3, Platform::Tiktok, 150_000),
        sns_stat(9, 3, Platform::Twitter, 41_000),
        sns_stat(10, 4, Platform::Instagram, 4_651),
        sns_stat(11, 4, Platform::Tiktok, 95_000),
        sns_stat(12, 4, Platform::Twitter, 937),
        sns_stat(16, 6, Platform::Instagram, 59),
        sns_stat(17, 6, Platform::Tiktok, 88_000),
        sns_stat(18, 6, Platform::Twitter, 383),
        sns_stat(19, 7, Platform::Instagram, 204_000),
        sns_stat(20, 7, Platform::Tiktok, 42_900),
        sns_stat(21, 7, Platform::Twitter, 26_068),
    ]
}

fn all_weekly_goals() -> Vec<WeeklyGoal> {
    vec![
        weekly_goal(1, 1, 4, 5),
        weekly_goal(2, 2, 3, 4),
        weekly_goal(3, 3, 5, 6),
        weekly_goal(4, 4, 2, 4),
        weekly_goal(6, 6, 3, 5),
        weekly_goal(7, 7, 2, 3),
    ]
}
