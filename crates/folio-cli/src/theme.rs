//! Persisted light/dark theme preference.
//!
//! The preference lives in `theme.json` in the state directory. A missing
//! file means the default (light) theme.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Color theme for rendered output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On-disk shape of `theme.json`.
#[derive(Debug, Serialize, Deserialize)]
struct ThemePreference {
    theme: Theme,
}

/// Loads the stored theme.
///
/// Returns `None` if the file doesn't exist.
/// Returns an error if the file exists but is unreadable/unparseable.
pub fn load_from(path: &Path) -> Result<Option<Theme>> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let preference: ThemePreference =
                serde_json::from_str(&content).context("failed to parse theme.json")?;
            Ok(Some(preference.theme))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).context("failed to read theme.json"),
    }
}

/// Writes the theme, creating the state directory if needed.
pub fn save_to(path: &Path, theme: Theme) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("failed to create state directory")?;
    }
    let json = serde_json::to_string_pretty(&ThemePreference { theme })
        .context("failed to serialize theme")?;
    std::fs::write(path, json).context("failed to write theme.json")?;
    Ok(())
}
