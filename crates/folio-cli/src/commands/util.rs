//! Shared helpers for CLI commands.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use folio_core::{LanguageBreakdown, Project};
use serde::Serialize;
use tokio::runtime::Runtime;

/// Cell glyphs for consecutive languages in a language bar.
const BAR_GLYPHS: [char; 4] = ['█', '▓', '▒', '░'];

pub fn runtime() -> Result<Runtime> {
    Runtime::new().context("failed to initialize tokio runtime")
}

/// User-facing message for a section that failed to load.
pub fn section_error(section: &str) -> String {
    format!("Unable to load {section}. Please try again later.")
}

/// Records why `section` failed. Users only ever see [`section_error`].
pub fn log_section_failure(section: &str, err: &anyhow::Error) {
    tracing::error!(section, error = ?err, "failed to load section");
}

/// Logs `err` and replaces it with the generic retry message, for commands
/// that consist of a single section.
pub fn section_failure(section: &str, err: &anyhow::Error) -> anyhow::Error {
    log_section_failure(section, err);
    anyhow::anyhow!(section_error(section))
}

pub fn write_json<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Horizontal title underline, e.g. `PROJECTS` over `────────`.
pub fn heading(output: &mut String, title: &str) {
    writeln!(output, "{title}").unwrap();
    writeln!(output, "{}", "─".repeat(title.chars().count())).unwrap();
}

/// Short repository name to primary language, for tagging timeline entries.
pub fn language_index(projects: &[Project]) -> HashMap<String, String> {
    projects
        .iter()
        .filter_map(|p| Some((p.name.clone(), p.language.clone()?)))
        .collect()
}

/// Proportional bar plus legend for the visible languages.
///
/// Every visible language gets at least one cell, so the bar can run a few
/// cells over `width` when many tiny languages are present.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    reason = "percentages are within 0..=100"
)]
pub fn language_bar(breakdown: &LanguageBreakdown, width: usize) -> String {
    let mut bar = String::new();
    let mut legend = Vec::new();
    for (share, glyph) in breakdown.visible().zip(BAR_GLYPHS.iter().cycle()) {
        let cells = ((share.percentage / 100.0) * width as f64).round() as usize;
        bar.extend(std::iter::repeat_n(*glyph, cells.max(1)));
        legend.push(format!(
            "{glyph} {} {}%",
            share.name,
            share.display_percentage()
        ));
    }
    if legend.is_empty() {
        return String::new();
    }
    format!("{bar}\n{}\n", legend.join("  "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_error_message() {
        assert_eq!(
            section_error("projects"),
            "Unable to load projects. Please try again later."
        );
    }

    #[test]
    fn test_section_failure_hides_details() {
        let err = anyhow::anyhow!("GitHub returned 500 Internal Server Error");
        let reported = section_failure("starred repositories", &err);
        assert_eq!(
            format!("{reported:#}"),
            "Unable to load starred repositories. Please try again later."
        );
    }

    #[test]
    fn test_language_bar() {
        let breakdown = LanguageBreakdown::from_bytes(&HashMap::from([
            ("Rust".to_string(), 750),
            ("Shell".to_string(), 250),
        ]));
        assert_eq!(
            language_bar(&breakdown, 20),
            "███████████████▓▓▓▓▓\n█ Rust 75.0%  ▓ Shell 25.0%\n"
        );
    }

    #[test]
    fn test_language_bar_empty() {
        assert_eq!(language_bar(&LanguageBreakdown::default(), 20), "");
    }

    #[test]
    fn test_heading_underlines_title() {
        let mut output = String::new();
        heading(&mut output, "README");
        assert_eq!(output, "README\n──────\n");
    }
}
