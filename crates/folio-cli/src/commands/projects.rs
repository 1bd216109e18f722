//! Project cards for the user's repositories.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use clap::Args;
use folio_core::Project;

use crate::Config;
use crate::commands::util;

pub const SECTION: &str = "projects";

const NO_DESCRIPTION: &str = "No description available";

#[derive(Debug, Args)]
pub struct ProjectsArgs {
    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Formats one project card.
pub fn format_project_card(project: &Project) -> String {
    let mut output = String::new();
    if project.is_fork {
        writeln!(output, "{} (fork)", project.name).unwrap();
    } else {
        writeln!(output, "{}", project.name).unwrap();
    }

    let description = if project.description.trim().is_empty() {
        NO_DESCRIPTION
    } else {
        project.description.as_str()
    };
    writeln!(output, "  {description}").unwrap();

    let tags = project.tags();
    if !tags.is_empty() {
        writeln!(output, "  {}", tags.join(", ")).unwrap();
    }

    writeln!(
        output,
        "  ★ {}  forks {}  issues {}  {}  updated {}",
        project.stars,
        project.forks,
        project.open_issues,
        project.size_display(),
        project.updated_at.format("%Y-%m-%d")
    )
    .unwrap();
    writeln!(output, "  {}", project.html_url).unwrap();
    output
}

/// Formats a list of cards separated by blank lines.
pub fn format_projects(projects: &[Project]) -> String {
    if projects.is_empty() {
        return "No public repositories yet.\n".to_string();
    }
    projects
        .iter()
        .map(format_project_card)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Runs the projects command.
pub fn run<W: Write>(writer: &mut W, args: &ProjectsArgs, config: &Config) -> Result<()> {
    let client = config.github_client()?;
    let runtime = util::runtime()?;
    let projects = runtime
        .block_on(client.repo_details())
        .map_err(|err| util::section_failure(SECTION, &anyhow::Error::from(err)))?;

    if args.json {
        util::write_json(writer, &projects)?;
    } else {
        write!(writer, "{}", format_projects(&projects))?;
    }
    Ok(())
}
