//! Data access layer (Supabase PostgREST, with static fallback).

pub mod mock;
pub mod supabase;

pub use supabase::{FallbackReason, Fetched, Source, SupabaseDb};

/// Table names as constants.
pub mod tables {
    pub const TALENTS: &str = "talents";
    pub const ACTIVITIES: &str = "activities";
    pub const SNS_STATS: &str = "sns_stats";
    pub const WEEKLY_GOALS: &str = "weekly_goals";
}
