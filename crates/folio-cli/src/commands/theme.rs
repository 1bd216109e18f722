//! Show or change the persisted theme.

use std::io::Write;

use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::Config;
use crate::theme::{self, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Light,
    Dark,
    /// Switch to the other theme.
    Toggle,
}

#[derive(Debug, Args)]
pub struct ThemeArgs {
    /// New theme; prints the current one when omitted.
    #[arg(value_enum)]
    pub action: Option<ThemeAction>,
}

/// Theme resulting from `action` applied to `current`.
pub const fn apply(current: Theme, action: ThemeAction) -> Theme {
    match action {
        ThemeAction::Light => Theme::Light,
        ThemeAction::Dark => Theme::Dark,
        ThemeAction::Toggle => current.toggled(),
    }
}

/// Runs the theme command.
pub fn run<W: Write>(writer: &mut W, args: &ThemeArgs, config: &Config) -> Result<()> {
    let path = config.theme_path();
    let current = theme::load_from(&path)?.unwrap_or_default();

    let Some(action) = args.action else {
        writeln!(writer, "{current}")?;
        return Ok(());
    };

    let next = apply(current, action);
    theme::save_to(&path, next)?;
    tracing::info!(theme = %next, path = %path.display(), "saved theme preference");
    writeln!(writer, "{next}")?;
    Ok(())
}
