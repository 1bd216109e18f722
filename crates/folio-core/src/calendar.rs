//! Daily contribution counts and the full-year heat-map.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classify::weight;
use crate::event::{EventKind, RawEvent};
use crate::year::YearWindow;

/// Heat-map intensity in `0..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContributionLevel(u8);

impl ContributionLevel {
    pub const NONE: Self = Self(0);
    pub const MAX: Self = Self(4);

    /// Step function from a day's contribution count.
    ///
    /// 0 → 0, 1–2 → 1, 3–4 → 2, 5–6 → 3, 7+ → 4.
    pub const fn from_count(contributions: u32) -> Self {
        match contributions {
            0 => Self(0),
            1..=2 => Self(1),
            3..=4 => Self(2),
            5..=6 => Self(3),
            _ => Self(4),
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

/// One cell of the heat-map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayContribution {
    pub date: NaiveDate,
    pub contributions: u32,
    pub level: ContributionLevel,
}

impl DayContribution {
    pub const fn new(date: NaiveDate, contributions: u32) -> Self {
        Self {
            date,
            contributions,
            level: ContributionLevel::from_count(contributions),
        }
    }
}

/// Sums event weights per UTC calendar day for events inside `window`.
///
/// Days without contribution-bearing events are absent; unknown events do
/// not create an entry.
pub fn aggregate<'a, I>(events: I, window: &YearWindow) -> BTreeMap<NaiveDate, u32>
where
    I: IntoIterator<Item = &'a RawEvent>,
{
    let mut daily = BTreeMap::new();
    for event in events {
        if !window.contains(event.created_at) || event.kind() == EventKind::Unknown {
            continue;
        }
        let count = daily.entry(event.created_at.date_naive()).or_insert(0u32);
        *count = count.saturating_add(weight(event));
    }
    daily
}

/// Expands daily counts into one entry per day of the year, ascending and
/// zero-filled.
pub fn materialize(daily: &BTreeMap<NaiveDate, u32>, window: &YearWindow) -> Vec<DayContribution> {
    let mut days = Vec::with_capacity(window.day_count());
    days.extend(
        window
            .days()
            .map(|date| DayContribution::new(date, daily.get(&date).copied().unwrap_or(0))),
    );
    days
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;
    use crate::event::EventRepo;

    fn event(event_type: &str, at: &str, payload: serde_json::Value) -> RawEvent {
        RawEvent {
            event_type: event_type.to_string(),
            created_at: DateTime::parse_from_rfc3339(at)
                .unwrap()
                .with_timezone(&Utc),
            repo: EventRepo {
                name: "octocat/hello".to_string(),
            },
            payload,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn level_step_function() {
        let expected = [
            (0, 0),
            (1, 1),
            (2, 1),
            (3, 2),
            (4, 2),
            (5, 3),
            (6, 3),
            (7, 4),
            (100, 4),
            (u32::MAX, 4),
        ];
        for (count, level) in expected {
            assert_eq!(
                ContributionLevel::from_count(count).value(),
                level,
                "count {count}"
            );
        }
    }

    #[test]
    fn push_and_create_on_same_day() {
        let window = YearWindow::new(2025).unwrap();
        let events = vec![
            event(
                "PushEvent",
                "2025-03-23T15:00:00Z",
                serde_json::json!({"commits": [{}, {}]}),
            ),
            event(
                "CreateEvent",
                "2025-03-23T09:00:00Z",
                serde_json::json!({"ref_type": "repository"}),
            ),
        ];

        let daily = aggregate(&events, &window);
        assert_eq!(daily.get(&date(2025, 3, 23)), Some(&3));

        let days = materialize(&daily, &window);
        let day = days.iter().find(|d| d.date == date(2025, 3, 23)).unwrap();
        assert_eq!(day.contributions, 3);
        assert_eq!(day.level.value(), 2);
    }

    #[test]
    fn branch_creation_counts_one() {
        let window = YearWindow::new(2025).unwrap();
        let events = vec![
            event(
                "CreateEvent",
                "2025-04-02T08:00:00Z",
                serde_json::json!({"ref_type": "branch", "ref": "feature"}),
            ),
            event(
                "CreateEvent",
                "2025-04-02T09:00:00Z",
                serde_json::json!({"ref_type": "tag", "ref": "v0.1.0"}),
            ),
        ];
        assert_eq!(aggregate(&events, &window).get(&date(2025, 4, 2)), Some(&2));
    }

    #[test]
    fn year_boundary_filtering() {
        let window = YearWindow::new(2025).unwrap();
        let events = vec![
            event(
                "IssuesEvent",
                "2025-12-31T23:59:59Z",
                serde_json::json!({}),
            ),
            event(
                "IssuesEvent",
                "2026-01-01T00:00:00Z",
                serde_json::json!({}),
            ),
            event(
                "IssuesEvent",
                "2024-12-31T23:59:59Z",
                serde_json::json!({}),
            ),
        ];

        let daily = aggregate(&events, &window);
        assert_eq!(daily.len(), 1);
        assert_eq!(daily.get(&date(2025, 12, 31)), Some(&1));
    }

    #[test]
    fn unknown_events_leave_no_entry() {
        let window = YearWindow::new(2025).unwrap();
        let events = vec![event(
            "WatchEvent",
            "2025-05-01T00:00:00Z",
            serde_json::json!({"action": "started"}),
        )];
        assert!(aggregate(&events, &window).is_empty());
    }

    #[test]
    fn empty_push_creates_zero_entry() {
        let window = YearWindow::new(2025).unwrap();
        let events = vec![event(
            "PushEvent",
            "2025-05-01T00:00:00Z",
            serde_json::json!({"commits": []}),
        )];
        assert_eq!(aggregate(&events, &window).get(&date(2025, 5, 1)), Some(&0));
    }

    #[test]
    fn materialize_empty_feed_is_full_year_of_zeroes() {
        let window = YearWindow::new(2025).unwrap();
        let days = materialize(&BTreeMap::new(), &window);
        assert_eq!(days.len(), 365);
        assert!(
            days.iter()
                .all(|d| d.contributions == 0 && d.level == ContributionLevel::NONE)
        );
    }

    #[test]
    fn materialize_is_strictly_ascending() {
        for year in [1999, 2000, 2023, 2024, 2025, 2100] {
            let window = YearWindow::new(year).unwrap();
            let days = materialize(&BTreeMap::new(), &window);
            assert_eq!(days.len(), window.day_count(), "year {year}");
            assert!(days.windows(2).all(|pair| pair[0].date < pair[1].date));
            assert_eq!(days[0].date, date(year, 1, 1));
            assert_eq!(days[days.len() - 1].date, date(year, 12, 31));
        }
    }

    #[test]
    fn materialized_total_matches_event_weights() {
        let window = YearWindow::new(2024).unwrap();
        let events = vec![
            event(
                "PushEvent",
                "2024-02-29T10:00:00Z",
                serde_json::json!({"commits": [{}, {}, {}, {}, {}, {}, {}, {}]}),
            ),
            event(
                "PullRequestEvent",
                "2024-02-29T11:00:00Z",
                serde_json::json!({}),
            ),
            event(
                "IssueCommentEvent",
                "2024-07-04T11:00:00Z",
                serde_json::json!({}),
            ),
            event(
                "PushEvent",
                "2023-07-04T11:00:00Z",
                serde_json::json!({"commits": [{}]}),
            ),
        ];

        let expected: u32 = events
            .iter()
            .filter(|e| window.contains(e.created_at))
            .map(weight)
            .sum();
        let days = materialize(&aggregate(&events, &window), &window);
        let total: u32 = days.iter().map(|d| d.contributions).sum();

        assert_eq!(total, expected);
        assert_eq!(total, 10);
        let leap_day = days.iter().find(|d| d.date == date(2024, 2, 29)).unwrap();
        assert_eq!(leap_day.level, ContributionLevel::MAX);
    }
}
