//! GitHub REST client for folio.
//!
//! Wraps the handful of public endpoints the portfolio reads:
//! - Repositories, with per-repository languages and latest commit
//! - The user profile and starred repositories
//! - The public event feed (a single page)
//! - Project detail: repository, recent commits, README

mod models;

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use folio_core::{Project, RawEvent, RepoName, Username, decode_readme};
use futures::future::try_join_all;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use models::{
    ApiCommit, ApiReadme, ApiRepo, CommitSummary, Owner, ProjectDetail, StarredRepo, UserProfile,
};

/// Default request timeout for API calls.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
const ACCEPT: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = "folio";
/// The event feed is read as a single page of this size.
const EVENTS_PER_PAGE: u8 = 100;
const DETAIL_COMMIT_COUNT: u8 = 5;

/// GitHub client errors.
#[derive(Debug, Error)]
pub enum GithubError {
    /// The provided token was invalid.
    #[error("invalid token: {reason}")]
    InvalidToken { reason: &'static str },
    /// Failed to build HTTP client.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    /// HTTP request failed.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// GitHub answered with a non-success status.
    #[error("GitHub API error: {status} for {url}")]
    Status { status: StatusCode, url: String },
    /// Failed to parse response.
    #[error("invalid response from {url}: {reason}")]
    InvalidResponse { url: String, reason: String },
}

/// Connection settings for [`Client`].
#[derive(Clone)]
pub struct ClientConfig {
    /// API root, e.g. `https://api.github.com`.
    pub api_base: String,
    /// Whose portfolio to read.
    pub username: Username,
    /// Optional static bearer token.
    pub token: Option<String>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_base", &self.api_base)
            .field("username", &self.username)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// GitHub REST client scoped to one user.
///
/// # Thread Safety
///
/// The client is safe to clone and share across threads. Each clone shares
/// the underlying HTTP connection pool.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    api_base: String,
    username: Username,
    token: Option<String>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_base", &self.api_base)
            .field("username", &self.username)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if a token is given but empty or whitespace-only, or
    /// if the HTTP client fails to build.
    pub fn new(config: ClientConfig) -> Result<Self, GithubError> {
        if let Some(token) = &config.token {
            if token.is_empty() {
                return Err(GithubError::InvalidToken {
                    reason: "token cannot be empty",
                });
            }
            if token.trim().is_empty() {
                return Err(GithubError::InvalidToken {
                    reason: "token cannot be whitespace-only",
                });
            }
        }

        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(GithubError::ClientBuild)?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            username: config.username,
            token: config.token,
        })
    }

    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Repositories of the user, most recently updated first.
    pub async fn list_repos(&self) -> Result<Vec<ApiRepo>, GithubError> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&direction=desc",
            self.api_base, self.username
        );
        self.get_json(&url).await
    }

    /// Public profile of the user.
    pub async fn user_profile(&self) -> Result<UserProfile, GithubError> {
        let url = format!("{}/users/{}", self.api_base, self.username);
        self.get_json(&url).await
    }

    /// Single repository owned by the user.
    pub async fn repo(&self, repo: &RepoName) -> Result<ApiRepo, GithubError> {
        let url = format!("{}/repos/{}", self.api_base, self.full_name(repo));
        self.get_json(&url).await
    }

    /// Language byte counts of a repository, keyed by `owner/name`.
    pub async fn repo_languages(&self, full_name: &str) -> Result<HashMap<String, u64>, GithubError> {
        let url = format!("{}/repos/{full_name}/languages", self.api_base);
        self.get_json(&url).await
    }

    /// Most recent commit of a repository, `None` for an empty repository.
    pub async fn latest_commit(&self, full_name: &str) -> Result<Option<ApiCommit>, GithubError> {
        Ok(self.commits(full_name, 1).await?.into_iter().next())
    }

    /// Up to `count` most recent commits of one of the user's repositories.
    pub async fn recent_commits(
        &self,
        repo: &RepoName,
        count: u8,
    ) -> Result<Vec<ApiCommit>, GithubError> {
        self.commits(&self.full_name(repo), count).await
    }

    /// One page of the user's public event feed, newest first.
    pub async fn events(&self) -> Result<Vec<RawEvent>, GithubError> {
        let url = format!(
            "{}/users/{}/events?per_page={EVENTS_PER_PAGE}",
            self.api_base, self.username
        );
        let events: Vec<RawEvent> = self.get_json(&url).await?;
        tracing::debug!(count = events.len(), "fetched event feed");
        Ok(events)
    }

    /// Repositories the user has starred.
    pub async fn starred(&self) -> Result<Vec<ApiRepo>, GithubError> {
        let url = format!("{}/users/{}/starred", self.api_base, self.username);
        self.get_json(&url).await
    }

    /// Decoded README of one of the user's repositories.
    ///
    /// A missing or undecodable README is `Ok(None)`, not an error.
    pub async fn readme(&self, repo: &RepoName) -> Result<Option<String>, GithubError> {
        let url = format!("{}/repos/{}/readme", self.api_base, self.full_name(repo));
        let readme = match self
            .get_optional_json::<ApiReadme>(&url, &[StatusCode::NOT_FOUND])
            .await
        {
            Ok(Some(readme)) => readme,
            Ok(None) => {
                tracing::debug!(%repo, "no README found");
                return Ok(None);
            }
            Err(GithubError::InvalidResponse { reason, .. }) => {
                tracing::debug!(%repo, %reason, "unreadable README payload");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        if readme.encoding.as_deref().is_some_and(|e| e != "base64") {
            tracing::debug!(%repo, encoding = ?readme.encoding, "unsupported README encoding");
            return Ok(None);
        }
        Ok(readme.content.as_deref().and_then(decode_readme))
    }

    /// All repositories as project cards, most recently updated first.
    ///
    /// Languages and latest commit are fetched concurrently for every
    /// repository. Any failing request fails the whole call.
    pub async fn repo_details(&self) -> Result<Vec<Project>, GithubError> {
        let repos = self.list_repos().await?;
        let mut projects = try_join_all(repos.into_iter().map(|repo| self.project(repo))).await?;
        projects.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        tracing::debug!(count = projects.len(), "fetched repository details");
        Ok(projects)
    }

    /// Starred repositories with their language breakdowns.
    pub async fn starred_details(&self) -> Result<Vec<StarredRepo>, GithubError> {
        let starred = self.starred().await?;
        try_join_all(starred.into_iter().map(|repo| async move {
            let languages = self.repo_languages(&repo.full_name).await?;
            Ok::<_, GithubError>(StarredRepo::from_api(repo, &languages))
        }))
        .await
    }

    /// Repository, languages, recent commits and README for the detail view.
    pub async fn project_detail(&self, repo: &RepoName) -> Result<ProjectDetail, GithubError> {
        let api_repo = self.repo(repo).await?;
        let (languages, commits, readme) = futures::try_join!(
            self.repo_languages(&api_repo.full_name),
            self.recent_commits(repo, DETAIL_COMMIT_COUNT),
            self.readme(repo),
        )?;

        let last_commit = commits.first().and_then(ApiCommit::authored_at);
        Ok(ProjectDetail {
            project: api_repo.into_project(&languages, last_commit),
            recent_commits: commits.into_iter().map(CommitSummary::from).collect(),
            readme,
        })
    }

    async fn project(&self, repo: ApiRepo) -> Result<Project, GithubError> {
        let (languages, latest) = futures::try_join!(
            self.repo_languages(&repo.full_name),
            self.latest_commit(&repo.full_name),
        )?;
        let last_commit: Option<DateTime<Utc>> = latest.as_ref().and_then(ApiCommit::authored_at);
        Ok(repo.into_project(&languages, last_commit))
    }

    async fn commits(&self, full_name: &str, count: u8) -> Result<Vec<ApiCommit>, GithubError> {
        let url = format!("{}/repos/{full_name}/commits?per_page={count}", self.api_base);
        // GitHub answers 409 Conflict for a repository without commits.
        Ok(self
            .get_optional_json(&url, &[StatusCode::CONFLICT])
            .await?
            .unwrap_or_default())
    }

    fn full_name(&self, repo: &RepoName) -> String {
        format!("{}/{repo}", self.username)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, GithubError> {
        self.get_optional_json(url, &[])
            .await?
            .ok_or_else(|| GithubError::InvalidResponse {
                url: url.to_string(),
                reason: "empty response".to_string(),
            })
    }

    /// GETs `url`, mapping any status in `absent` to `Ok(None)`.
    async fn get_optional_json<T: DeserializeOwned>(
        &self,
        url: &str,
        absent: &[StatusCode],
    ) -> Result<Option<T>, GithubError> {
        let mut request = self.http.get(url).header(reqwest::header::ACCEPT, ACCEPT);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if absent.contains(&status) {
            return Ok(None);
        }
        if !status.is_success() {
            tracing::warn!(%status, url, "GitHub request failed");
            return Err(GithubError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map(Some)
            .map_err(|err| GithubError::InvalidResponse {
                url: url.to_string(),
                reason: err.to_string(),
            })
    }
}
