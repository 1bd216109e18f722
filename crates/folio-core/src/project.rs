//! Project cards and the "ongoing project" highlight.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::languages::LanguageBreakdown;

/// A repository as shown on the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    /// Primary language reported by GitHub.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub languages: LanguageBreakdown,
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub html_url: String,
    pub is_fork: bool,
    /// Repository size in kilobytes.
    pub size_kb: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_commit: Option<DateTime<Utc>>,
}

impl Project {
    /// Language names, largest first.
    pub fn tags(&self) -> Vec<String> {
        self.languages.names()
    }

    /// Repository size formatted in megabytes, e.g. `1.5 MB`.
    #[allow(clippy::cast_precision_loss)]
    pub fn size_display(&self) -> String {
        format!("{:.1} MB", self.size_kb as f64 / 1024.0)
    }
}

/// The most recently updated non-fork project and how fresh it is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OngoingProject {
    pub project: Project,
    /// 100 on the day of the last commit, minus one per elapsed day.
    pub progress: u8,
}

/// Picks the first non-fork project from a list sorted by last update.
pub fn ongoing_project(projects: &[Project], now: DateTime<Utc>) -> Option<OngoingProject> {
    let project = projects.iter().find(|p| !p.is_fork)?;
    let progress = project
        .last_commit
        .map_or(0, |at| freshness(now.signed_duration_since(at).num_days()));
    Some(OngoingProject {
        project: project.clone(),
        progress,
    })
}

/// `100 - days`, clamped to `0..=100`. Commits dated in the future count as
/// today.
fn freshness(days_since: i64) -> u8 {
    let days = days_since.max(0);
    u8::try_from((100 - days.min(100)).max(0)).unwrap_or(0)
}
