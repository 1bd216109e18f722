//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use folio_core::Username;
use folio_github::{Client, ClientConfig, DEFAULT_API_BASE};
use serde::{Deserialize, Serialize};

/// Activities shown before the timeline collapses further months.
pub const DEFAULT_ACTIVITY_CAP: usize = 4;

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// GitHub account whose portfolio is shown.
    pub username: Option<String>,
    /// Personal access token. Unauthenticated requests are rate limited.
    pub token: Option<String>,
    /// GitHub REST API base URL.
    pub api_base: String,
    /// Number of timeline activities shown before "Show more activity".
    pub activity_cap: usize,
    /// Directory for persisted preferences.
    pub state_dir: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("username", &self.username)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("activity_cap", &self.activity_cap)
            .field("state_dir", &self.state_dir)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: None,
            token: None,
            api_base: DEFAULT_API_BASE.to_string(),
            activity_cap: DEFAULT_ACTIVITY_CAP,
            state_dir: dirs_state_path().unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // FOLIO_USERNAME, FOLIO_TOKEN, ...
        figment = figment.merge(Env::prefixed("FOLIO_"));

        figment.extract()
    }

    /// Builds an API client for the configured user.
    pub fn github_client(&self) -> Result<Client> {
        let username = self
            .username
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .context("missing GitHub username (set FOLIO_USERNAME or username in config.toml)")?;
        let username = Username::new(username).context("invalid GitHub username")?;

        Client::new(ClientConfig {
            api_base: self.api_base.clone(),
            username,
            token: self.token.clone(),
        })
        .context("failed to create GitHub client")
    }

    /// Location of the persisted theme preference.
    pub fn theme_path(&self) -> PathBuf {
        self.state_dir.join("theme.json")
    }
}

/// Returns the platform-specific config directory for folio.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("folio"))
}

/// Returns the platform-specific state directory for folio.
///
/// On Linux: `~/.local/state/folio`. Platforms without a state directory
/// fall back to the data directory.
pub fn dirs_state_path() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::data_dir)
        .map(|p| p.join("folio"))
}
