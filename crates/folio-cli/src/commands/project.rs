//! Detail view for a single repository.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use folio_core::RepoName;
use folio_github::ProjectDetail;

use crate::Config;
use crate::commands::util;

pub const SECTION: &str = "project details";

const LANGUAGE_BAR_WIDTH: usize = 40;

#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Repository name, without the owner.
    pub name: String,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Formats the detail view: stats, languages, recent commits, README.
pub fn format_project_detail(detail: &ProjectDetail) -> String {
    let project = &detail.project;
    let mut output = String::new();

    writeln!(output, "{}", project.name).unwrap();
    if !project.description.trim().is_empty() {
        writeln!(output, "  {}", project.description).unwrap();
    }
    writeln!(output, "  {}", project.html_url).unwrap();
    writeln!(
        output,
        "  ★ {}  forks {}  issues {}  {}",
        project.stars,
        project.forks,
        project.open_issues,
        project.size_display()
    )
    .unwrap();
    let last_commit = project
        .last_commit
        .map_or_else(|| "never".to_string(), |at| at.format("%Y-%m-%d").to_string());
    writeln!(
        output,
        "  created {}  updated {}  last commit {last_commit}",
        project.created_at.format("%Y-%m-%d"),
        project.updated_at.format("%Y-%m-%d")
    )
    .unwrap();

    let bar = util::language_bar(&project.languages, LANGUAGE_BAR_WIDTH);
    if !bar.is_empty() {
        writeln!(output).unwrap();
        util::heading(&mut output, "LANGUAGES");
        output.push_str(&bar);
    }

    writeln!(output).unwrap();
    util::heading(&mut output, "RECENT COMMITS");
    if detail.recent_commits.is_empty() {
        writeln!(output, "No commits yet.").unwrap();
    }
    for commit in &detail.recent_commits {
        write!(output, "{}  {}", commit.short_sha, commit.title).unwrap();
        match (&commit.author, commit.date) {
            (Some(author), Some(date)) => {
                write!(output, "  ({author}, {})", date.format("%Y-%m-%d")).unwrap();
            }
            (Some(author), None) => write!(output, "  ({author})").unwrap(),
            (None, Some(date)) => write!(output, "  ({})", date.format("%Y-%m-%d")).unwrap(),
            (None, None) => {}
        }
        writeln!(output).unwrap();
    }

    writeln!(output).unwrap();
    util::heading(&mut output, "README");
    match &detail.readme {
        Some(readme) => {
            output.push_str(readme.trim_end());
            writeln!(output).unwrap();
        }
        None => writeln!(output, "No README found.").unwrap(),
    }
    output
}

/// Runs the project command.
pub fn run<W: Write>(writer: &mut W, args: &ProjectArgs, config: &Config) -> Result<()> {
    let name = RepoName::new(args.name.as_str()).context("invalid repository name")?;
    let client = config.github_client()?;
    let runtime = util::runtime()?;
    let detail = runtime
        .block_on(client.project_detail(&name))
        .map_err(|err| util::section_failure(SECTION, &anyhow::Error::from(err)))?;

    if args.json {
        util::write_json(writer, &detail)?;
    } else {
        write!(writer, "{}", format_project_detail(&detail))?;
    }
    Ok(())
}
