//! GitHub API payloads and the shaped records built from them.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use folio_core::{LanguageBreakdown, Project};
use serde::{Deserialize, Serialize};

/// Repository as listed by `/users/{user}/repos` and `/users/{user}/starred`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiRepo {
    pub name: String,
    pub full_name: String,
    pub owner: Owner,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    pub html_url: String,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub size: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ApiRepo {
    /// Shapes the repository into a project card.
    pub fn into_project(
        self,
        languages: &HashMap<String, u64>,
        last_commit: Option<DateTime<Utc>>,
    ) -> Project {
        Project {
            name: self.name,
            description: self.description.unwrap_or_default(),
            language: self.language,
            languages: LanguageBreakdown::from_bytes(languages),
            stars: self.stargazers_count,
            forks: self.forks_count,
            open_issues: self.open_issues_count,
            html_url: self.html_url,
            is_fork: self.fork,
            size_kb: self.size,
            created_at: self.created_at,
            updated_at: self.updated_at,
            last_commit,
        }
    }
}

/// Repository owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Public profile from `/users/{user}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
}

impl UserProfile {
    /// Display name, falling back to the login.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.login)
    }
}

/// Entry of `/repos/{owner}/{repo}/commits`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCommit {
    pub sha: String,
    pub commit: CommitBody,
    #[serde(default)]
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitBody {
    #[serde(default)]
    pub message: String,
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitAuthor {
    #[serde(default)]
    pub name: Option<String>,
    pub date: DateTime<Utc>,
}

impl ApiCommit {
    /// Author date of the commit, when GitHub reports one.
    pub fn authored_at(&self) -> Option<DateTime<Utc>> {
        self.commit.author.as_ref().map(|author| author.date)
    }
}

/// Commit as shown in the project detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitSummary {
    /// Seven-character abbreviated SHA.
    pub short_sha: String,
    /// First line of the commit message.
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

impl From<ApiCommit> for CommitSummary {
    fn from(commit: ApiCommit) -> Self {
        let date = commit.authored_at();
        let author = commit.commit.author.and_then(|a| a.name);
        Self {
            short_sha: commit.sha.chars().take(7).collect(),
            title: commit
                .commit
                .message
                .lines()
                .next()
                .unwrap_or_default()
                .to_string(),
            author,
            date,
        }
    }
}

/// Body of `/repos/{owner}/{repo}/readme`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiReadme {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
}

/// A starred repository with its language breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarredRepo {
    pub full_name: String,
    pub owner: Owner,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub languages: LanguageBreakdown,
    pub html_url: String,
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub updated_at: DateTime<Utc>,
}

impl StarredRepo {
    pub(crate) fn from_api(repo: ApiRepo, languages: &HashMap<String, u64>) -> Self {
        Self {
            full_name: repo.full_name,
            owner: repo.owner,
            description: repo.description.unwrap_or_default(),
            language: repo.language,
            languages: LanguageBreakdown::from_bytes(languages),
            html_url: repo.html_url,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            open_issues: repo.open_issues_count,
            updated_at: repo.updated_at,
        }
    }
}

/// Everything the project detail view shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDetail {
    pub project: Project,
    pub recent_commits: Vec<CommitSummary>,
    /// Decoded README, `None` when absent or unreadable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readme: Option<String>,
}
