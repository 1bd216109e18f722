//! Immutable result of one contribution aggregation pass.

use std::collections::HashMap;

use serde::Serialize;

use crate::calendar::{DayContribution, aggregate, materialize};
use crate::event::RawEvent;
use crate::timeline::{MonthBucket, group_with_languages};
use crate::types::ValidationError;
use crate::visibility::{VisibilityWindow, compute_visible};
use crate::year::YearWindow;

/// Heat-map and timeline for one year, built from a single event feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContributionSnapshot {
    pub year: i32,
    pub days: Vec<DayContribution>,
    pub months: Vec<MonthBucket>,
}

impl ContributionSnapshot {
    /// Aggregates `events` for `year`.
    pub fn build(events: &[RawEvent], year: i32) -> Result<Self, ValidationError> {
        Self::build_with_languages(events, year, &HashMap::new())
    }

    /// Aggregates `events` for `year`, tagging timeline entries with
    /// repository languages.
    pub fn build_with_languages(
        events: &[RawEvent],
        year: i32,
        languages: &HashMap<String, String>,
    ) -> Result<Self, ValidationError> {
        let window = YearWindow::new(year)?;
        let daily = aggregate(events, &window);
        let days = materialize(&daily, &window);
        let months = group_with_languages(events, &window, languages);

        tracing::debug!(
            year,
            events = events.len(),
            active_days = daily.len(),
            months = months.len(),
            "built contribution snapshot"
        );

        Ok(Self { year, days, months })
    }

    /// Total contributions in the year.
    pub fn total(&self) -> u64 {
        self.days.iter().map(|d| u64::from(d.contributions)).sum()
    }

    /// Timeline window for `cap` default-visible activities.
    pub fn visibility(&self, cap: usize) -> VisibilityWindow<'_> {
        compute_visible(&self.months, cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed() -> Vec<RawEvent> {
        serde_json::from_str(
            r#"[
                {
                    "type": "PushEvent",
                    "created_at": "2025-03-23T15:00:00Z",
                    "repo": {"name": "octocat/WordPress-LivePhotos"},
                    "payload": {"commits": [{"sha": "a"}, {"sha": "b"}]}
                },
                {
                    "type": "CreateEvent",
                    "created_at": "2025-03-23T09:00:00Z",
                    "repo": {"name": "octocat/WordPress-LivePhotos"},
                    "payload": {"ref_type": "repository"}
                },
                {
                    "type": "WatchEvent",
                    "created_at": "2025-03-22T09:00:00Z",
                    "repo": {"name": "rust-lang/rust"},
                    "payload": {"action": "started"}
                }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn builds_heat_map_and_timeline_together() {
        let snapshot = ContributionSnapshot::build(&feed(), 2025).unwrap();
        assert_eq!(snapshot.days.len(), 365);
        assert_eq!(snapshot.total(), 3);
        assert_eq!(snapshot.months.len(), 1);
        assert_eq!(snapshot.months[0].label, "March 2025");

        let window = snapshot.visibility(4);
        assert!(!window.has_toggle());
    }

    #[test]
    fn branch_creation_adds_to_heat_map_only() {
        let events: Vec<RawEvent> = serde_json::from_str(
            r#"[{
                "type": "CreateEvent",
                "created_at": "2025-06-10T12:00:00Z",
                "repo": {"name": "octocat/folio"},
                "payload": {"ref_type": "branch", "ref": "feature"}
            }]"#,
        )
        .unwrap();
        let snapshot = ContributionSnapshot::build(&events, 2025).unwrap();
        assert_eq!(snapshot.total(), 1);
        assert!(snapshot.months.is_empty());
    }

    #[test]
    fn empty_feed_yields_blank_year() {
        let snapshot = ContributionSnapshot::build(&[], 2025).unwrap();
        assert_eq!(snapshot.days.len(), 365);
        assert_eq!(snapshot.total(), 0);
        assert!(snapshot.months.is_empty());
        assert!(!snapshot.visibility(4).has_toggle());
    }

    #[test]
    fn other_year_sees_nothing() {
        let snapshot = ContributionSnapshot::build(&feed(), 2024).unwrap();
        assert_eq!(snapshot.days.len(), 366);
        assert_eq!(snapshot.total(), 0);
    }

    #[test]
    fn rejects_invalid_year() {
        assert!(ContributionSnapshot::build(&[], i32::MIN).is_err());
    }
}
