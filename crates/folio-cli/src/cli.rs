//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::contributions::ContributionsArgs;
use crate::commands::overview::OverviewArgs;
use crate::commands::project::ProjectArgs;
use crate::commands::projects::ProjectsArgs;
use crate::commands::stars::StarsArgs;
use crate::commands::theme::ThemeArgs;

/// GitHub portfolio in the terminal.
///
/// Shows a user's profile, projects, starred repositories and a yearly
/// contribution heat-map built from the public events feed.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Profile, ongoing project, top projects and contributions.
    Overview(OverviewArgs),

    /// List all project cards.
    Projects(ProjectsArgs),

    /// Show one project in detail.
    Project(ProjectArgs),

    /// List starred repositories.
    Stars(StarsArgs),

    /// Show the contribution heat-map and activity timeline.
    Contributions(ContributionsArgs),

    /// Show or change the theme preference.
    Theme(ThemeArgs),
}
