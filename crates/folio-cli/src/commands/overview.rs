//! Portfolio overview.
//!
//! Shows the profile header, the ongoing project, the two most recently
//! updated projects and the contribution section. Every section loads and
//! fails on its own; a failed section prints the generic retry message and
//! the rest of the overview still renders.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use chrono::{Datelike, Utc};
use clap::Args;
use folio_core::{ContributionSnapshot, OngoingProject, Project, VisibilityState, ongoing_project};
use folio_github::UserProfile;
use serde::Serialize;

use crate::Config;
use crate::commands::{contributions, projects, util};

const PROFILE_SECTION: &str = "profile";
const ONGOING_SECTION: &str = "ongoing project";
const TOP_PROJECT_COUNT: usize = 2;
const PROGRESS_WIDTH: usize = 20;

#[derive(Debug, Args)]
pub struct OverviewArgs {
    /// Calendar year for the contribution section (defaults to the current year).
    #[arg(long)]
    pub year: Option<i32>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Loaded overview sections; `None` marks a section that failed to load.
#[derive(Debug, Serialize)]
pub struct OverviewData {
    pub profile: Option<UserProfile>,
    /// Ongoing project, when projects loaded and at least one is not a fork.
    pub ongoing: Option<OngoingProject>,
    pub projects: Option<Vec<Project>>,
    pub contributions: Option<ContributionSnapshot>,
    pub failed_sections: Vec<&'static str>,
}

/// `[██████░░░░] 60%`
fn progress_bar(progress: u8) -> String {
    let filled = usize::from(progress.min(100)) * PROGRESS_WIDTH / 100;
    format!(
        "[{}{}] {progress}%",
        "█".repeat(filled),
        "░".repeat(PROGRESS_WIDTH - filled)
    )
}

fn format_profile(output: &mut String, profile: &UserProfile) {
    writeln!(output, "{} (@{})", profile.display_name(), profile.login).unwrap();
    if let Some(bio) = profile.bio.as_deref().filter(|b| !b.trim().is_empty()) {
        writeln!(output, "{}", bio.trim()).unwrap();
    }
    if let Some(location) = profile.location.as_deref().filter(|l| !l.trim().is_empty()) {
        writeln!(output, "{location}").unwrap();
    }
    writeln!(
        output,
        "{} public repositories · {} followers · {} following",
        profile.public_repos, profile.followers, profile.following
    )
    .unwrap();
}

/// Formats the human-readable overview.
pub fn format_overview(data: &OverviewData, activity_cap: usize) -> String {
    let mut output = String::new();

    match &data.profile {
        Some(profile) => format_profile(&mut output, profile),
        None => writeln!(output, "{}", util::section_error(PROFILE_SECTION)).unwrap(),
    }

    writeln!(output).unwrap();
    util::heading(&mut output, "ONGOING PROJECT");
    match (&data.projects, &data.ongoing) {
        (None, _) => writeln!(output, "{}", util::section_error(ONGOING_SECTION)).unwrap(),
        (Some(_), None) => writeln!(output, "No ongoing project.").unwrap(),
        (Some(_), Some(ongoing)) => {
            writeln!(
                output,
                "{}  {}",
                ongoing.project.name,
                progress_bar(ongoing.progress)
            )
            .unwrap();
            if !ongoing.project.description.trim().is_empty() {
                writeln!(output, "  {}", ongoing.project.description).unwrap();
            }
        }
    }

    writeln!(output).unwrap();
    util::heading(&mut output, "PROJECTS");
    match &data.projects {
        Some(list) => output.push_str(&projects::format_projects(list)),
        None => writeln!(output, "{}", util::section_error(projects::SECTION)).unwrap(),
    }

    writeln!(output).unwrap();
    util::heading(&mut output, "CONTRIBUTIONS");
    match &data.contributions {
        Some(snapshot) => {
            let state = VisibilityState::new(snapshot.visibility(activity_cap));
            output.push_str(&contributions::format_contributions(snapshot, &state));
        }
        None => writeln!(output, "{}", util::section_error(contributions::SECTION)).unwrap(),
    }
    output
}

/// Runs the overview command.
pub fn run<W: Write>(writer: &mut W, args: &OverviewArgs, config: &Config) -> Result<()> {
    let client = config.github_client()?;
    let now = Utc::now();
    let year = args.year.unwrap_or_else(|| now.year());
    let view = contributions::ContributionView::new();

    let runtime = util::runtime()?;
    let (profile, all_projects) =
        runtime.block_on(async { tokio::join!(client.user_profile(), client.repo_details()) });
    let languages = all_projects
        .as_deref()
        .map(util::language_index)
        .unwrap_or_default();
    let snapshot = runtime.block_on(view.load(year, &languages, client.events()));

    let mut failed_sections = Vec::new();
    let mut record_failure = |section: &'static str, err: &anyhow::Error| {
        util::log_section_failure(section, err);
        failed_sections.push(section);
    };
    let profile = profile
        .map_err(|err| record_failure(PROFILE_SECTION, &anyhow::Error::from(err)))
        .ok();
    let all_projects = all_projects
        .map_err(|err| record_failure(projects::SECTION, &anyhow::Error::from(err)))
        .ok();
    let contributions = match snapshot {
        Ok(snapshot) => snapshot.map(|s| ContributionSnapshot::clone(&s)),
        Err(err) => {
            record_failure(contributions::SECTION, &err);
            None
        }
    };

    let data = OverviewData {
        profile,
        ongoing: all_projects
            .as_deref()
            .and_then(|list| ongoing_project(list, now)),
        projects: all_projects.map(|list| list.into_iter().take(TOP_PROJECT_COUNT).collect()),
        contributions,
        failed_sections,
    };

    if args.json {
        util::write_json(writer, &data)?;
    } else {
        write!(writer, "{}", format_overview(&data, config.activity_cap))?;
    }
    Ok(())
}
