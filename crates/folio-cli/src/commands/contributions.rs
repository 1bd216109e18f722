//! Contribution heat-map and activity timeline.
//!
//! Implements `folio contributions`, and provides the renderers the
//! overview reuses for its contributions section.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::future::Future;
use std::io::Write;
use std::sync::Arc;

use anyhow::{Result, bail};
use chrono::{Datelike, Utc};
use clap::Args;
use folio_core::{
    ContributionSnapshot, DayContribution, FetchGeneration, MonthBucket, RawEvent, SnapshotSlot,
    VisibilityState,
};
use folio_github::GithubError;
use serde::Serialize;

use crate::Config;
use crate::commands::util;

pub const SECTION: &str = "contributions";

pub const NO_ACTIVITY_TITLE: &str = "No activity";
pub const NO_ACTIVITY_DETAIL: &str = "This user doesn't have any public activity yet.";

/// Glyph per contribution level, 0 through 4.
const LEVEL_GLYPHS: [char; 5] = ['·', '░', '▒', '▓', '█'];
const WEEKDAY_LABELS: [&str; 7] = ["    ", "Mon ", "    ", "Wed ", "    ", "Fri ", "    "];
const SUMMARY_WIDTH: usize = 36;
const TARGET_WIDTH: usize = 30;

#[derive(Debug, Args)]
pub struct ContributionsArgs {
    /// Calendar year to show (defaults to the current year).
    #[arg(long)]
    pub year: Option<i32>,

    /// Show every month instead of collapsing older activity.
    #[arg(long)]
    pub all: bool,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// The contribution snapshot on display.
///
/// Each [`load`](Self::load) starts a new fetch sequence; a sequence that
/// completes after a newer one has started is discarded instead of
/// overwriting the newer year.
#[derive(Debug)]
pub struct ContributionView {
    slot: SnapshotSlot<ContributionSnapshot>,
}

impl Default for ContributionView {
    fn default() -> Self {
        Self::new()
    }
}

impl ContributionView {
    pub fn new() -> Self {
        Self {
            slot: SnapshotSlot::new(FetchGeneration::new()),
        }
    }

    /// Fetches events with `fetch` and builds the snapshot for `year`.
    ///
    /// Returns `Ok(None)` when a newer load superseded this one.
    pub async fn load<F>(
        &self,
        year: i32,
        languages: &HashMap<String, String>,
        fetch: F,
    ) -> Result<Option<Arc<ContributionSnapshot>>>
    where
        F: Future<Output = Result<Vec<RawEvent>, GithubError>>,
    {
        let ticket = self.slot.begin();
        let events = fetch.await?;
        let snapshot = ContributionSnapshot::build_with_languages(&events, year, languages)?;
        if self.slot.publish(ticket, snapshot) {
            Ok(self.slot.current())
        } else {
            Ok(None)
        }
    }

    pub fn current(&self) -> Option<Arc<ContributionSnapshot>> {
        self.slot.current()
    }
}

#[derive(Debug, Serialize)]
struct JsonContributions<'a> {
    year: i32,
    total: u64,
    days: &'a [DayContribution],
    months: &'a [MonthBucket],
    hidden_activity_count: usize,
}

/// Formats the heat-map grid: one column per week, Sunday on top.
pub fn format_heat_map(snapshot: &ContributionSnapshot) -> String {
    let mut output = String::new();
    let total = snapshot.total();
    let noun = if total == 1 { "contribution" } else { "contributions" };
    writeln!(output, "{total} {noun} in {}", snapshot.year).unwrap();

    let Some(first) = snapshot.days.first() else {
        return output;
    };
    let offset = first.date.weekday().num_days_from_sunday() as usize;
    let weeks = (offset + snapshot.days.len()).div_ceil(7);

    let mut months = vec![' '; weeks];
    let mut next_free = 0;
    let mut rows = vec![vec![' '; weeks]; 7];
    for (i, day) in snapshot.days.iter().enumerate() {
        let slot = offset + i;
        let week = slot / 7;
        rows[slot % 7][week] = level_glyph(day);

        if day.date.day() == 1 && week >= next_free {
            let name = day.date.format("%b").to_string();
            for (j, c) in name.chars().enumerate() {
                if let Some(cell) = months.get_mut(week + j) {
                    *cell = c;
                }
            }
            next_free = week + name.len() + 1;
        }
    }

    let header: String = months.into_iter().collect();
    writeln!(output, "    {}", header.trim_end()).unwrap();
    for (label, row) in WEEKDAY_LABELS.iter().zip(rows) {
        let cells: String = row.into_iter().collect();
        writeln!(output, "{label}{}", cells.trim_end()).unwrap();
    }

    let legend: Vec<String> = LEVEL_GLYPHS.iter().map(char::to_string).collect();
    writeln!(output, "    Less {} More", legend.join(" ")).unwrap();
    output
}

fn level_glyph(day: &DayContribution) -> char {
    LEVEL_GLYPHS
        .get(usize::from(day.level.value()))
        .copied()
        .unwrap_or(LEVEL_GLYPHS[LEVEL_GLYPHS.len() - 1])
}

/// Formats the month-grouped timeline for the current toggle state.
pub fn format_timeline(state: &VisibilityState<'_>) -> String {
    let mut output = String::new();
    let window = state.window();
    if window.all_months().is_empty() {
        writeln!(output, "{NO_ACTIVITY_TITLE}").unwrap();
        writeln!(output, "  {NO_ACTIVITY_DETAIL}").unwrap();
        return output;
    }

    for (i, month) in state.shown_months().iter().enumerate() {
        if i > 0 {
            writeln!(output).unwrap();
        }
        writeln!(output, "{}", month.label).unwrap();
        for activity in &month.activities {
            let mut target = activity.repo_short_name().to_string();
            if let Some(language) = &activity.language {
                write!(target, " ({language})").unwrap();
            }
            writeln!(
                output,
                "  {:<SUMMARY_WIDTH$}{target:<TARGET_WIDTH$}{}",
                activity.summary(),
                activity.day_label()
            )
            .unwrap();
        }
    }

    if let Some(label) = state.toggle_label() {
        if !state.shown_months().is_empty() {
            writeln!(output).unwrap();
        }
        if state.is_expanded() {
            writeln!(output, "[{label}]").unwrap();
        } else {
            let hidden = window.hidden_activity_count();
            let noun = if hidden == 1 { "activity" } else { "activities" };
            let months = window.hidden_months().len();
            let month_noun = if months == 1 { "month" } else { "months" };
            // Nothing is "earlier" when the newest month is already hidden.
            let earlier = if window.visible_months().is_empty() {
                ""
            } else {
                "earlier "
            };
            writeln!(
                output,
                "[{label}] {hidden} more {noun} in {months} {earlier}{month_noun} (use --all)"
            )
            .unwrap();
        }
    }
    output
}

/// Heat-map followed by the timeline.
pub fn format_contributions(
    snapshot: &ContributionSnapshot,
    state: &VisibilityState<'_>,
) -> String {
    let mut output = format_heat_map(snapshot);
    writeln!(output).unwrap();
    output.push_str(&format_timeline(state));
    output
}

fn format_contributions_json<'a>(
    snapshot: &'a ContributionSnapshot,
    state: &VisibilityState<'a>,
) -> JsonContributions<'a> {
    JsonContributions {
        year: snapshot.year,
        total: snapshot.total(),
        days: &snapshot.days,
        months: state.shown_months(),
        hidden_activity_count: if state.is_expanded() {
            0
        } else {
            state.window().hidden_activity_count()
        },
    }
}

/// Runs the contributions command.
pub fn run<W: Write>(writer: &mut W, args: &ContributionsArgs, config: &Config) -> Result<()> {
    let client = config.github_client()?;
    let year = args.year.unwrap_or_else(|| Utc::now().year());
    let view = ContributionView::new();

    let runtime = util::runtime()?;
    let loaded = runtime.block_on(async {
        let languages = match client.list_repos().await {
            Ok(repos) => repos
                .into_iter()
                .filter_map(|repo| Some((repo.name, repo.language?)))
                .collect(),
            Err(err) => {
                tracing::warn!(error = %err, "repository languages unavailable");
                HashMap::new()
            }
        };
        view.load(year, &languages, client.events()).await
    });

    let snapshot = match loaded {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => bail!("contribution load was superseded"),
        Err(err) => return Err(util::section_failure(SECTION, &err)),
    };

    let mut state = VisibilityState::new(snapshot.visibility(config.activity_cap));
    if args.all {
        state.toggle();
    }

    if args.json {
        util::write_json(writer, &format_contributions_json(&snapshot, &state))?;
    } else {
        write!(writer, "{}", format_contributions(&snapshot, &state))?;
    }
    Ok(())
}
