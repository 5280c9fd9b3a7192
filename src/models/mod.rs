// SPDX-License-Identifier: MIT
// Copyright 2026 Talent Tracker Contributors

//! Data models for the application.

pub mod activity;
pub mod goal;
pub mod sns;
pub mod talent;
pub mod view;

pub use activity::{Activity, NewActivity};
pub use goal::WeeklyGoal;
pub use sns::{NewSnsStat, Platform, SnsStat};
pub use talent::{Talent, TopicUpdate};
pub use view::TalentView;
