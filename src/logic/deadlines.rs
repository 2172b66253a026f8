// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 ApplyIQ contributors

//! Deadline arithmetic and relative timestamp display.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Signed whole days from `now` until midnight at the start of `deadline`,
/// rounded up. Zero or negative means the deadline has passed.
pub fn days_until(deadline: NaiveDate, now: DateTime<Utc>) -> i64 {
    let midnight = deadline
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time");
    let seconds = (midnight - now.naive_utc()).num_seconds();
    seconds.div_euclid(SECONDS_PER_DAY)
        + if seconds.rem_euclid(SECONDS_PER_DAY) > 0 {
            1
        } else {
            0
        }
}

/// `"N days left"` or `"Overdue"` for card footers.
pub fn days_left_label(days: i64) -> String {
    if days > 0 {
        format!("{days} days left")
    } else {
        "Overdue".to_string()
    }
}

/// Urgency bands used to color deadline text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Urgency {
    /// Within a week (or already passed).
    Critical,
    /// Within a month.
    Soon,
    Comfortable,
}

impl Urgency {
    pub fn for_days(days: i64) -> Self {
        if days <= 7 {
            Urgency::Critical
        } else if days <= 30 {
            Urgency::Soon
        } else {
            Urgency::Comfortable
        }
    }
}

/// Compact relative timestamp for message rows: time of day for today,
/// "Yesterday", "N days ago" within a week, then a short date.
pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days_ago = (now - timestamp).num_seconds().div_euclid(SECONDS_PER_DAY);
    match days_ago {
        i64::MIN..=0 => {
            let (am_pm, hour) = timestamp.hour12();
            format!("{}:{:02} {}", hour, timestamp.minute(), if am_pm { "PM" } else { "AM" })
        }
        1 => "Yesterday".to_string(),
        2..=6 => format!("{days_ago} days ago"),
        _ => format!("{} {}", month_abbrev(timestamp.month()), timestamp.day()),
    }
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn days_until_ceils_partial_days() {
        // 30 days and 12 hours ahead rounds up to 31.
        let now = at("2025-08-30T12:00:00Z");
        assert_eq!(days_until(date(2025, 9, 30), now), 31);

        // Exactly at midnight of the deadline: zero days left.
        assert_eq!(days_until(date(2025, 8, 30), at("2025-08-30T00:00:00Z")), 0);
    }

    #[test]
    fn past_deadlines_are_zero_or_negative() {
        let now = at("2025-08-30T12:00:00Z");
        assert!(days_until(date(2025, 8, 30), now) <= 0);
        assert_eq!(days_until(date(2025, 8, 20), now), -10);
        assert_eq!(days_left_label(days_until(date(2025, 8, 20), now)), "Overdue");
    }

    #[test]
    fn urgency_bands_match_thresholds() {
        assert_eq!(Urgency::for_days(-3), Urgency::Critical);
        assert_eq!(Urgency::for_days(7), Urgency::Critical);
        assert_eq!(Urgency::for_days(8), Urgency::Soon);
        assert_eq!(Urgency::for_days(30), Urgency::Soon);
        assert_eq!(Urgency::for_days(31), Urgency::Comfortable);
    }

    #[test]
    fn relative_format_buckets() {
        let now = at("2024-10-21T12:00:00Z");
        assert_eq!(format_relative(at("2024-10-21T10:30:00Z"), now), "10:30 AM");
        assert_eq!(format_relative(at("2024-10-20T10:30:00Z"), now), "Yesterday");
        assert_eq!(format_relative(at("2024-10-18T09:20:00Z"), now), "3 days ago");
        assert_eq!(format_relative(at("2024-10-01T09:20:00Z"), now), "Oct 1");
    }
}
