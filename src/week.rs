// SPDX-License-Identifier: MIT
// Copyright 2026 Talent Tracker Contributors

//! ISO 8601 week arithmetic.
//!
//! Weeks start on Monday and week 1 is the week containing the year's first
//! Thursday. The same scheme is used for every (week_number, year) bucket in
//! the system; mixing schemes would shift rows into neighboring weeks.

use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// An ISO (week, year) pair. The year is the ISO year of the week, which can
/// differ from the calendar year of dates near January 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekOfYear {
    /// Week number in 1..=53
    pub week: u32,
    /// ISO year the week belongs to
    pub year: i32,
}

impl WeekOfYear {
    /// The week one before this one, rolling the year backward at week 1.
    pub fn prev(self) -> Self {
        self.shifted(-7)
    }

    /// The week one after this one, rolling the year forward at the final
    /// week (52 or 53 depending on the year).
    pub fn next(self) -> Self {
        self.shifted(7)
    }

    /// Shift by whole days via the week's Thursday, so 53-week years are
    /// handled by the same arithmetic as regular rollover.
    fn shifted(self, days: i64) -> Self {
        match NaiveDate::from_isoywd_opt(self.year, self.week, Weekday::Thu) {
            Some(thursday) => week_number(thursday + Duration::days(days)),
            // Out-of-range (week, year) input: leave it unchanged
            None => self,
        }
    }
}

impl std::fmt::Display for WeekOfYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

/// Compute the ISO week of a calendar date.
///
/// Shifts the date to the Thursday of its Monday-based week; that Thursday's
/// calendar year is the ISO year, and the week number is the ordinal of the
/// Thursday divided by 7, rounded up. Late-December dates can land in week 1
/// of the next ISO year and early-January dates in week 52/53 of the
/// previous one.
pub fn week_number(date: NaiveDate) -> WeekOfYear {
    let to_thursday = 4 - i64::from(date.weekday().number_from_monday());
    let thursday = date + Duration::days(to_thursday);
    WeekOfYear {
        week: (thursday.ordinal() + 6) / 7,
        year: thursday.year(),
    }
}

/// The ISO week containing today (UTC).
pub fn current_week() -> WeekOfYear {
    week_number(Utc::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_mid_year_week() {
        // 2024-07-17 is a Wednesday in week 29
        assert_eq!(
            week_number(d(2024, 7, 17)),
            WeekOfYear {
                week: 29,
                year: 2024
            }
        );
    }

    #[test]
    fn test_december_date_rolls_into_next_iso_year() {
        // Jan 1 2026 is a Thursday, so Dec 31 2025 is already in 2026-W01
        assert_eq!(
            week_number(d(2025, 12, 31)),
            WeekOfYear {
                week: 1,
                year: 2026
            }
        );
        // Dec 30 2024 is the Monday of 2025-W01
        assert_eq!(
            week_number(d(2024, 12, 30)),
            WeekOfYear {
                week: 1,
                year: 2025
            }
        );
    }

    #[test]
    fn test_january_date_stays_in_previous_iso_year() {
        // Jan 1 2021 is a Friday, still in 2020-W53
        assert_eq!(
            week_number(d(2021, 1, 1)),
            WeekOfYear {
                week: 53,
                year: 2020
            }
        );
        // Jan 1 2016 is a Friday, still in 2015-W53
        assert_eq!(
            week_number(d(2016, 1, 1)),
            WeekOfYear {
                week: 53,
                year: 2015
            }
        );
    }

    #[test]
    fn test_matches_chrono_iso_week() {
        // Sweep a decade of days against chrono's own ISO week computation
        let mut date = d(2015, 1, 1);
        let end = d(2025, 12, 31);
        while date <= end {
            let ours = week_number(date);
            let iso = date.iso_week();
            assert_eq!(ours.week, iso.week(), "week mismatch at {date}");
            assert_eq!(ours.year, iso.year(), "year mismatch at {date}");
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_week_range_bounds() {
        let mut date = d(2019, 1, 1);
        let end = d(2022, 12, 31);
        while date <= end {
            let w = week_number(date);
            assert!((1..=53).contains(&w.week), "week out of range at {date}");
            assert!(
                (w.year - date.year()).abs() <= 1,
                "year not a neighbor at {date}"
            );
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_prev_rolls_year_backward() {
        let first = WeekOfYear {
            week: 1,
            year: 2021,
        };
        assert_eq!(
            first.prev(),
            WeekOfYear {
                week: 53,
                year: 2020
            }
        );
    }

    #[test]
    fn test_next_rolls_year_forward() {
        // 2019 has 52 ISO weeks
        let last = WeekOfYear {
            week: 52,
            year: 2019,
        };
        assert_eq!(last.next(), WeekOfYear { week: 1, year: 2020 });

        // 2020 has 53
        let last = WeekOfYear {
            week: 53,
            year: 2020,
        };
        assert_eq!(last.next(), WeekOfYear { week: 1, year: 2021 });
    }

    #[test]
    fn test_next_then_prev_is_identity() {
        for year in 2018..=2023 {
            for week in [1_u32, 2, 26, 51, 52] {
                let w = WeekOfYear { week, year };
                assert_eq!(w.next().prev(), w, "round trip failed for {w}");
            }
        }
    }
}
