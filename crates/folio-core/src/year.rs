//! Calendar-year boundaries in UTC.

use chrono::{DateTime, NaiveDate, Utc};

use crate::types::ValidationError;

/// The closed interval `[Jan 1 00:00:00, Dec 31 23:59:59.999999999]` of one
/// year, in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    year: i32,
    first_day: NaiveDate,
    last_day: NaiveDate,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl YearWindow {
    /// Builds the window for `year`.
    pub fn new(year: i32) -> Result<Self, ValidationError> {
        let out_of_range = || ValidationError::YearOutOfRange { year };
        let first_day = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(out_of_range)?;
        let last_day = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(out_of_range)?;
        let start = first_day
            .and_hms_opt(0, 0, 0)
            .ok_or_else(out_of_range)?
            .and_utc();
        let end = last_day
            .and_hms_nano_opt(23, 59, 59, 999_999_999)
            .ok_or_else(out_of_range)?
            .and_utc();

        Ok(Self {
            year,
            first_day,
            last_day,
            start,
            end,
        })
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// First instant of the year.
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Last instant of the year.
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether `timestamp` falls inside the year, both ends inclusive.
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }

    /// Number of calendar days in the year (365 or 366).
    pub fn day_count(&self) -> usize {
        let days = self.last_day.signed_duration_since(self.first_day).num_days() + 1;
        usize::try_from(days).unwrap_or_default()
    }

    /// Every date of the year, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let last_day = self.last_day;
        self.first_day
            .iter_days()
            .take_while(move |day| *day <= last_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn boundaries_are_inclusive() {
        let window = YearWindow::new(2025).unwrap();
        assert!(window.contains(ts("2025-01-01T00:00:00Z")));
        assert!(window.contains(ts("2025-12-31T23:59:59Z")));
        assert!(!window.contains(ts("2026-01-01T00:00:00Z")));
        assert!(!window.contains(ts("2024-12-31T23:59:59Z")));
    }

    #[test]
    fn day_count_follows_leap_years() {
        assert_eq!(YearWindow::new(2025).unwrap().day_count(), 365);
        assert_eq!(YearWindow::new(2024).unwrap().day_count(), 366);
        assert_eq!(YearWindow::new(1900).unwrap().day_count(), 365);
        assert_eq!(YearWindow::new(2000).unwrap().day_count(), 366);
    }

    #[test]
    fn days_iterates_whole_year() {
        let window = YearWindow::new(2024).unwrap();
        let days: Vec<_> = window.days().collect();
        assert_eq!(days.len(), 366);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(days[365], NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn rejects_unrepresentable_year() {
        assert_eq!(
            YearWindow::new(i32::MAX),
            Err(ValidationError::YearOutOfRange { year: i32::MAX })
        );
    }
}
