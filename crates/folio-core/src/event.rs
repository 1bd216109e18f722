//! Raw events from the GitHub activity feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event_type::GithubEventType;

/// One entry of a user's public event feed, as returned by GitHub.
///
/// Only the fields folio reads are modelled; the payload stays opaque and is
/// inspected through the accessor methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEvent {
    /// Upstream event type string, e.g. `PushEvent`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// When the event occurred.
    pub created_at: DateTime<Utc>,
    /// The repository the event belongs to.
    pub repo: EventRepo,
    /// Type-specific payload.
    #[serde(default)]
    pub payload: serde_json::Value,
}

/// Repository reference embedded in an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRepo {
    /// Full `owner/name` form.
    pub name: String,
}

/// Normalized kind of a raw event.
///
/// Closed set: anything the classifier does not recognize lands in
/// `Unknown`, so classification never fails on new upstream types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A push carrying zero or more commits.
    CommitPush,
    /// Creation of a repository.
    RepoCreate,
    /// Creation of a branch or tag.
    RefCreate,
    /// Issue, pull request, issue comment, or review activity.
    IssueOrPrInteraction,
    /// Any other event.
    Unknown,
}

impl RawEvent {
    /// Parses the upstream type string.
    pub fn parsed_type(&self) -> Option<GithubEventType> {
        self.event_type.parse().ok()
    }

    /// Resolves the normalized kind of this event.
    pub fn kind(&self) -> EventKind {
        match self.parsed_type() {
            Some(GithubEventType::Push) => EventKind::CommitPush,
            Some(GithubEventType::Create) if self.ref_type() == Some("repository") => {
                EventKind::RepoCreate
            }
            Some(GithubEventType::Create) => EventKind::RefCreate,
            Some(
                GithubEventType::Issues
                | GithubEventType::PullRequest
                | GithubEventType::IssueComment
                | GithubEventType::PullRequestReview,
            ) => EventKind::IssueOrPrInteraction,
            None => EventKind::Unknown,
        }
    }

    /// Number of commits listed in a push payload, 0 when absent.
    pub fn commit_count(&self) -> u32 {
        self.payload
            .get("commits")
            .and_then(serde_json::Value::as_array)
            .map_or(0, |commits| {
                u32::try_from(commits.len()).unwrap_or(u32::MAX)
            })
    }

    /// The `ref_type` of a create payload (`repository`, `branch`, `tag`).
    pub fn ref_type(&self) -> Option<&str> {
        self.payload.get("ref_type").and_then(serde_json::Value::as_str)
    }

    /// Free-text description carried by a create payload.
    pub fn description(&self) -> Option<&str> {
        self.payload
            .get("description")
            .and_then(serde_json::Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}
