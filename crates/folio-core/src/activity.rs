//! Normalized timeline entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::EventKind;

/// A displayable activity derived from one raw event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub kind: EventKind,
    /// Full `owner/name` of the repository.
    pub repo: String,
    pub occurred_at: DateTime<Utc>,
    /// Commits in the push, for `CommitPush` entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_count: Option<u32>,
    /// Primary language of the repository, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Description carried by a repository creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Activity {
    /// Repository name without the owner prefix.
    pub fn repo_short_name(&self) -> &str {
        self.repo
            .split_once('/')
            .map_or(self.repo.as_str(), |(_, name)| name)
    }

    /// Short day label, e.g. `Mar 23`.
    pub fn day_label(&self) -> String {
        self.occurred_at.format("%b %-d").to_string()
    }

    /// Month-year label used to group the timeline, e.g. `March 2025`.
    pub fn month_label(&self) -> String {
        self.occurred_at.format("%B %Y").to_string()
    }

    /// One-line headline for the timeline.
    pub fn summary(&self) -> String {
        match self.kind {
            EventKind::CommitPush => {
                let count = self.commit_count.unwrap_or_default();
                let noun = if count == 1 { "commit" } else { "commits" };
                format!("Created {count} {noun} in 1 repository")
            }
            EventKind::RepoCreate => "Created 1 repository".to_string(),
            EventKind::RefCreate | EventKind::IssueOrPrInteraction | EventKind::Unknown => {
                format!("Contributed to {}", self.repo_short_name())
            }
        }
    }

    /// Returns a copy annotated with the repository language.
    #[must_use]
    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }
}
