//! Event classification.
//!
//! Every raw event has a contribution weight (how much it adds to its day on
//! the heat-map) and at most one displayable [`Activity`]. Only commit pushes
//! and repository creations appear on the timeline; branch and tag creations
//! and issue and pull request activity count toward the calendar but are not
//! listed.

use crate::activity::Activity;
use crate::event::{EventKind, RawEvent};

/// Contribution weight of an event.
///
/// Pushes count their commits, any create event and issue/PR activity count
/// one, anything else counts zero.
pub fn weight(event: &RawEvent) -> u32 {
    match event.kind() {
        EventKind::CommitPush => event.commit_count(),
        EventKind::RepoCreate | EventKind::RefCreate | EventKind::IssueOrPrInteraction => 1,
        EventKind::Unknown => 0,
    }
}

/// Maps an event to its timeline entry, if it has one.
///
/// A push with zero commits still contributes (zero) to its day but has no
/// entry.
pub fn classify(event: &RawEvent) -> Option<Activity> {
    let kind = event.kind();
    let commit_count = match kind {
        EventKind::CommitPush => match event.commit_count() {
            0 => return None,
            n => Some(n),
        },
        EventKind::RepoCreate => None,
        EventKind::RefCreate | EventKind::IssueOrPrInteraction | EventKind::Unknown => {
            return None;
        }
    };

    let description = match kind {
        EventKind::RepoCreate => event.description().map(str::to_string),
        _ => None,
    };

    Some(Activity {
        kind,
        repo: event.repo.name.clone(),
        occurred_at: event.created_at,
        commit_count,
        language: None,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(event_type: &str, payload: serde_json::Value) -> RawEvent {
        RawEvent {
            event_type: event_type.to_string(),
            created_at: chrono::DateTime::parse_from_rfc3339("2025-03-23T12:00:00Z")
                .unwrap()
                .with_timezone(&chrono::Utc),
            repo: crate::event::EventRepo {
                name: "octocat/hello".to_string(),
            },
            payload,
        }
    }

    #[test]
    fn push_yields_commit_activity() {
        let e = event(
            "PushEvent",
            serde_json::json!({"commits": [{}, {}, {}]}),
        );
        assert_eq!(weight(&e), 3);
        let activity = classify(&e).unwrap();
        assert_eq!(activity.kind, EventKind::CommitPush);
        assert_eq!(activity.commit_count, Some(3));
        assert_eq!(activity.repo, "octocat/hello");
    }

    #[test]
    fn empty_push_has_no_activity() {
        let e = event("PushEvent", serde_json::json!({"commits": []}));
        assert_eq!(weight(&e), 0);
        assert!(classify(&e).is_none());
    }

    #[test]
    fn repo_creation_yields_activity_with_description() {
        let e = event(
            "CreateEvent",
            serde_json::json!({"ref_type": "repository", "description": "Live photos"}),
        );
        assert_eq!(weight(&e), 1);
        let activity = classify(&e).unwrap();
        assert_eq!(activity.kind, EventKind::RepoCreate);
        assert_eq!(activity.commit_count, None);
        assert_eq!(activity.description.as_deref(), Some("Live photos"));
    }

    #[test]
    fn branch_and_tag_creation_count_but_are_not_listed() {
        for ref_type in ["branch", "tag"] {
            let e = event(
                "CreateEvent",
                serde_json::json!({"ref_type": ref_type, "ref": "v1"}),
            );
            assert_eq!(weight(&e), 1, "{ref_type}");
            assert!(classify(&e).is_none(), "{ref_type}");
        }
    }

    #[test]
    fn interactions_count_but_are_not_listed() {
        let e = event("PullRequestReviewEvent", serde_json::json!({}));
        assert_eq!(weight(&e), 1);
        assert!(classify(&e).is_none());
    }

    #[test]
    fn unknown_events_are_ignored() {
        let e = event("GollumEvent", serde_json::json!({"pages": []}));
        assert_eq!(weight(&e), 0);
        assert!(classify(&e).is_none());
    }
}
