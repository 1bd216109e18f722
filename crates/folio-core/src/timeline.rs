//! Month-grouped activity timeline.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::activity::Activity;
use crate::classify::classify;
use crate::event::RawEvent;
use crate::year::YearWindow;

/// Activities of one calendar month, in encounter order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBucket {
    /// Month-year label, e.g. `March 2025`.
    pub label: String,
    pub activities: Vec<Activity>,
}

impl MonthBucket {
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

/// Groups the timeline entries of in-year events by month.
///
/// This is a stable grouping pass: months appear in the order their first
/// activity is encountered, activities keep feed order within a month. A
/// newest-first feed therefore yields newest-first months.
pub fn group<'a, I>(events: I, window: &YearWindow) -> Vec<MonthBucket>
where
    I: IntoIterator<Item = &'a RawEvent>,
{
    group_with_languages(events, window, &HashMap::new())
}

/// Like [`group`], annotating each activity with its repository's language.
///
/// `languages` is keyed by the repository name without owner.
pub fn group_with_languages<'a, I>(
    events: I,
    window: &YearWindow,
    languages: &HashMap<String, String>,
) -> Vec<MonthBucket>
where
    I: IntoIterator<Item = &'a RawEvent>,
{
    let mut buckets: Vec<MonthBucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for event in events {
        if !window.contains(event.created_at) {
            continue;
        }
        let Some(activity) = classify(event) else {
            continue;
        };
        let language = languages.get(activity.repo_short_name()).cloned();
        let activity = activity.with_language(language);

        let label = activity.month_label();
        let slot = *index.entry(label.clone()).or_insert_with(|| {
            buckets.push(MonthBucket {
                label,
                activities: Vec::new(),
            });
            buckets.len() - 1
        });
        buckets[slot].activities.push(activity);
    }

    tracing::debug!(months = buckets.len(), "grouped activity timeline");
    buckets
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;
    use crate::event::{EventKind, EventRepo};

    fn event(event_type: &str, at: &str, repo: &str, payload: serde_json::Value) -> RawEvent {
        RawEvent {
            event_type: event_type.to_string(),
            created_at: DateTime::parse_from_rfc3339(at)
                .unwrap()
                .with_timezone(&Utc),
            repo: EventRepo {
                name: repo.to_string(),
            },
            payload,
        }
    }

    fn push(at: &str, commits: usize) -> RawEvent {
        let commits: Vec<_> = (0..commits).map(|_| serde_json::json!({})).collect();
        event(
            "PushEvent",
            at,
            "octocat/hello",
            serde_json::json!({ "commits": commits }),
        )
    }

    #[test]
    fn push_and_create_share_a_month() {
        let window = YearWindow::new(2025).unwrap();
        let events = vec![
            push("2025-03-23T15:00:00Z", 2),
            event(
                "CreateEvent",
                "2025-03-23T09:00:00Z",
                "octocat/WordPress-LivePhotos",
                serde_json::json!({"ref_type": "repository"}),
            ),
        ];

        let months = group(&events, &window);
        assert_eq!(months.len(), 1);
        assert_eq!(months[0].label, "March 2025");
        assert_eq!(months[0].activities.len(), 2);
        assert_eq!(months[0].activities[0].kind, EventKind::CommitPush);
        assert_eq!(months[0].activities[1].kind, EventKind::RepoCreate);
    }

    #[test]
    fn months_follow_first_occurrence_not_calendar_order() {
        let window = YearWindow::new(2025).unwrap();
        let events = vec![
            push("2025-05-02T00:00:00Z", 1),
            push("2025-03-10T00:00:00Z", 1),
            push("2025-05-01T00:00:00Z", 1),
        ];

        let months = group(&events, &window);
        let labels: Vec<_> = months.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, ["May 2025", "March 2025"]);
        assert_eq!(months[0].len(), 2);
        assert_eq!(
            months[0].activities[1].occurred_at.to_rfc3339(),
            "2025-05-01T00:00:00+00:00"
        );
    }

    #[test]
    fn events_without_activity_create_no_bucket() {
        let window = YearWindow::new(2025).unwrap();
        let events = vec![
            event(
                "IssuesEvent",
                "2025-06-01T00:00:00Z",
                "octocat/hello",
                serde_json::json!({}),
            ),
            push("2025-06-02T00:00:00Z", 0),
        ];
        assert!(group(&events, &window).is_empty());
    }

    #[test]
    fn out_of_year_events_are_skipped() {
        let window = YearWindow::new(2025).unwrap();
        let events = vec![push("2026-01-01T00:00:00Z", 3), push("2024-12-31T23:00:00Z", 1)];
        assert!(group(&events, &window).is_empty());
    }

    #[test]
    fn languages_are_attached_by_short_name() {
        let window = YearWindow::new(2025).unwrap();
        let events = vec![push("2025-01-05T00:00:00Z", 1)];
        let languages = HashMap::from([("hello".to_string(), "Rust".to_string())]);

        let months = group_with_languages(&events, &window, &languages);
        assert_eq!(months[0].activities[0].language.as_deref(), Some("Rust"));
    }
}
