//! Countdown to the next quarterly sprint intake

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Time remaining, split for display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// Time from `now` until `target`; all zero once `target` has passed
    pub fn until(now: NaiveDateTime, target: NaiveDateTime) -> Self {
        let total = (target - now).num_seconds();
        if total <= 0 {
            return Self::default();
        }
        Self {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
        }
    }

    /// `(value, unit)` cells, values padded to two digits
    pub fn cells(&self) -> [(String, &'static str); 4] {
        [
            (pad2(self.days), "Days"),
            (pad2(self.hours), "Hours"),
            (pad2(self.minutes), "Minutes"),
            (pad2(self.seconds), "Seconds"),
        ]
    }
}

pub fn pad2(value: i64) -> String {
    format!("{:02}", value)
}

/// Midnight on the first day of the quarter after the one containing `now`
pub fn next_intake(now: NaiveDateTime) -> NaiveDateTime {
    let quarter = now.month0() / 3;
    let (year, next_quarter) = if quarter == 3 {
        (now.year() + 1, 0)
    } else {
        (now.year(), quarter + 1)
    };
    NaiveDate::from_ymd_opt(year, next_quarter * 3 + 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or(now)
}

/// e.g. `"Next intake starts in Q2 2025"`
pub fn intake_label(intake: NaiveDateTime) -> String {
    format!(
        "Next intake starts in Q{} {}",
        intake.month0() / 3 + 1,
        intake.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_next_intake_within_year() {
        assert_eq!(next_intake(at(2025, 2, 14, 9, 0, 0)), at(2025, 4, 1, 0, 0, 0));
        assert_eq!(next_intake(at(2025, 4, 1, 0, 0, 0)), at(2025, 7, 1, 0, 0, 0));
        assert_eq!(next_intake(at(2025, 9, 30, 23, 59, 59)), at(2025, 10, 1, 0, 0, 0));
    }

    #[test]
    fn test_next_intake_rolls_year() {
        assert_eq!(next_intake(at(2025, 10, 1, 0, 0, 0)), at(2026, 1, 1, 0, 0, 0));
        assert_eq!(next_intake(at(2025, 12, 31, 12, 0, 0)), at(2026, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_time_left_breakdown() {
        let now = at(2025, 3, 30, 22, 58, 30);
        let left = TimeLeft::until(now, next_intake(now));

        assert_eq!(
            left,
            TimeLeft {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 30,
            }
        );
    }

    #[test]
    fn test_time_left_after_target_is_zero() {
        let target = at(2025, 4, 1, 0, 0, 0);
        assert_eq!(TimeLeft::until(target, target), TimeLeft::default());
        assert_eq!(
            TimeLeft::until(at(2025, 5, 1, 0, 0, 0), target),
            TimeLeft::default()
        );
    }

    #[test]
    fn test_cells_are_padded() {
        let cells = TimeLeft {
            days: 45,
            hours: 3,
            minutes: 0,
            seconds: 9,
        }
        .cells();

        assert_eq!(cells[0], ("45".to_string(), "Days"));
        assert_eq!(cells[1], ("03".to_string(), "Hours"));
        assert_eq!(cells[2], ("00".to_string(), "Minutes"));
        assert_eq!(cells[3], ("09".to_string(), "Seconds"));
    }

    #[test]
    fn test_intake_label() {
        assert_eq!(
            intake_label(at(2025, 4, 1, 0, 0, 0)),
            "Next intake starts in Q2 2025"
        );
        assert_eq!(
            intake_label(at(2026, 1, 1, 0, 0, 0)),
            "Next intake starts in Q1 2026"
        );
    }
}
