// SPDX-License-Identifier: MIT
// Copyright 2026 Talent Tracker Contributors

//! Weekly dashboard aggregation.
//!
//! For one (week, year) window: fetch the roster once, then fan out one
//! task per talent whose three sub-fetches (activities, SNS stats, goal)
//! run concurrently. A talent whose task fails still gets a view with
//! empty children; roster order is re-imposed on assembly regardless of
//! fetch completion order.

use futures_util::future::join_all;

use crate::db::SupabaseDb;
use crate::models::{Activity, SnsStat, Talent, TalentView, WeeklyGoal};
use crate::week::WeekOfYear;

/// Builds per-talent weekly views.
#[derive(Clone)]
pub struct DashboardService {
    db: SupabaseDb,
}

/// The three week-scoped child fetches for one talent.
#[derive(Debug, Default)]
pub struct TalentChildren {
    pub activities: Vec<Activity>,
    pub sns_stats: Vec<SnsStat>,
    pub weekly_goal: Option<WeeklyGoal>,
}

impl DashboardService {
    pub fn new(db: SupabaseDb) -> Self {
        Self { db }
    }

    /// Build the dashboard for one ISO week.
    ///
    /// The returned list matches the talent roster order (name ascending).
    /// Read failures never surface here: the data access layer degrades to
    /// fallback data, and a talent whose whole fetch group dies is reduced
    /// to a bare view rather than aborting the aggregation.
    pub async fn build_dashboard(&self, week: WeekOfYear) -> Vec<TalentView> {
        let talents = self.db.list_talents().await;
        tracing::debug!(
            week = %week,
            talents = talents.data.len(),
            live = talents.is_live(),
            "Building dashboard"
        );

        let handles: Vec<_> = talents
            .data
            .iter()
            .map(|talent| {
                let db = self.db.clone();
                let talent_id = talent.id;
                tokio::spawn(async move {
                    let (activities, sns_stats, weekly_goal) = tokio::join!(
                        db.list_activities(talent_id, Some(week)),
                        db.list_sns_stats(talent_id, Some(week)),
                        db.get_weekly_goal(talent_id, Some(week)),
                    );
                    TalentChildren {
                        activities: activities.data,
                        sns_stats: sns_stats.data,
                        weekly_goal: weekly_goal.data,
                    }
                })
            })
            .collect();

        let results = join_all(handles).await;

        talents
            .data
            .into_iter()
            .zip(results)
            .map(|(talent, joined)| match joined {
                Ok(children) => assemble(talent, children),
                Err(e) => {
                    tracing::warn!(talent_id = talent.id, error = %e, "Talent fetch group failed");
                    TalentView::bare(talent)
                }
            })
            .collect()
    }
}

/// Merge a talent with its fetched children into a view.
fn assemble(talent: Talent, children: TalentChildren) -> TalentView {
    TalentView {
        id: talent.id,
        name: talent.name,
        avatar_url: talent.avatar_url,
        weekly_topic: talent.weekly_topic,
        activities: children.activities,
        sns_stats: children.sns_stats,
        weekly_goal: children.weekly_goal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::mock;

    fn test_talent(id: i64, name: &str) -> Talent {
        Talent {
            id,
            name: name.to_string(),
            avatar_url: None,
            weekly_topic: None,
            created_at: None,
        }
    }

    #[test]
    fn test_assemble_merges_children() {
        let view = assemble(
            test_talent(1, "中塚智"),
            TalentChildren {
                activities: mock::activities_for(1),
                sns_stats: mock::sns_stats_for(1),
                weekly_goal: mock::weekly_goal_for(1),
            },
        );

        assert_eq!(view.id, 1);
        assert_eq!(view.activities.len(), 2);
        assert_eq!(view.sns_stats.len(), 3);
        assert!(view.weekly_goal.is_some());
    }

    #[test]
    fn test_bare_view_has_empty_children() {
        let view = TalentView::bare(test_talent(2, "五十嵐諒"));

        assert!(view.activities.is_empty());
        assert!(view.sns_stats.is_empty());
        assert!(view.weekly_goal.is_none());
    }

    #[tokio::test]
    async fn test_dashboard_preserves_roster_order() {
        let service = DashboardService::new(SupabaseDb::new_offline());
        let views = service.build_dashboard(crate::week::current_week()).await;

        let roster: Vec<String> = mock::talents().into_iter().map(|t| t.name).collect();
        let view_names: Vec<String> = views.iter().map(|v| v.name.clone()).collect();
        assert_eq!(view_names, roster);
    }

    #[tokio::test]
    async fn test_dashboard_produces_view_for_every_talent() {
        let service = DashboardService::new(SupabaseDb::new_offline());
        let views = service.build_dashboard(crate::week::current_week()).await;

        assert_eq!(views.len(), mock::talents().len());
        for view in &views {
            assert_eq!(view.sns_stats.len(), 3, "talent {} sns stats", view.id);
            assert!(view.weekly_goal.is_some(), "talent {} goal", view.id);
        }
    }
}
