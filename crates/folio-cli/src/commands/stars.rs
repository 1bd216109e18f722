//! Starred repositories.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use clap::Args;
use folio_github::StarredRepo;

use crate::Config;
use crate::commands::util;

pub const SECTION: &str = "starred repositories";

#[derive(Debug, Args)]
pub struct StarsArgs {
    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn format_starred(repos: &[StarredRepo]) -> String {
    let mut output = String::new();
    if repos.is_empty() {
        writeln!(output, "No starred repositories").unwrap();
        writeln!(
            output,
            "  Stars are a way to keep track of repositories you find interesting."
        )
        .unwrap();
        return output;
    }

    for (i, repo) in repos.iter().enumerate() {
        if i > 0 {
            writeln!(output).unwrap();
        }
        writeln!(output, "{}", repo.full_name).unwrap();
        let description = if repo.description.trim().is_empty() {
            "No description available"
        } else {
            repo.description.as_str()
        };
        writeln!(output, "  {description}").unwrap();

        write!(output, "  ").unwrap();
        if let Some(language) = &repo.language {
            write!(output, "{language}  ").unwrap();
        }
        write!(output, "★ {}  forks {}", repo.stars, repo.forks).unwrap();
        if repo.open_issues > 0 {
            write!(output, "  issues {}", repo.open_issues).unwrap();
        }
        writeln!(output, "  updated {}", repo.updated_at.format("%Y-%m-%d")).unwrap();
        writeln!(output, "  {}", repo.html_url).unwrap();
    }
    output
}

/// Runs the stars command.
pub fn run<W: Write>(writer: &mut W, args: &StarsArgs, config: &Config) -> Result<()> {
    let client = config.github_client()?;
    let runtime = util::runtime()?;
    let starred = runtime
        .block_on(client.starred_details())
        .map_err(|err| util::section_failure(SECTION, &anyhow::Error::from(err)))?;

    if args.json {
        util::write_json(writer, &starred)?;
    } else {
        write!(writer, "{}", format_starred(&starred))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use folio_core::LanguageBreakdown;
    use folio_github::Owner;
    use insta::assert_snapshot;

    use super::*;

    fn starred(full_name: &str, language: Option<&str>, open_issues: u64) -> StarredRepo {
        let (owner, _) = full_name.split_once('/').unwrap();
        StarredRepo {
            full_name: full_name.to_string(),
            owner: Owner {
                login: owner.to_string(),
                avatar_url: None,
            },
            description: String::new(),
            language: language.map(str::to_string),
            languages: LanguageBreakdown::default(),
            html_url: format!("https://github.com/{full_name}"),
            stars: 100,
            forks: 7,
            open_issues,
            updated_at: Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_starred_list() {
        let output = format_starred(&[
            starred("tokio-rs/tokio", Some("Rust"), 3),
            starred("octo/notes", None, 0),
        ]);
        assert_snapshot!(output, @r"
tokio-rs/tokio
  No description available
  Rust  ★ 100  forks 7  issues 3  updated 2025-01-15
  https://github.com/tokio-rs/tokio

octo/notes
  No description available
  ★ 100  forks 7  updated 2025-01-15
  https://github.com/octo/notes
");
    }

    #[test]
    fn test_no_starred_repositories() {
        let output = format_starred(&[]);
        assert!(output.starts_with("No starred repositories\n"));
    }
}
