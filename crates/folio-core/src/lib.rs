//! Core domain logic for the folio portfolio.
//!
//! This crate turns raw GitHub data into display-ready structures:
//! - Classification: mapping activity-feed events to contribution weights
//! - Calendar: a dense, full-year contribution heat-map
//! - Timeline: month-grouped activity with a "show more" window
//! - Projects: language breakdowns, README decoding, the ongoing project

mod activity;
pub mod calendar;
pub mod classify;
pub mod event;
pub mod event_type;
pub mod generation;
pub mod languages;
pub mod project;
pub mod readme;
pub mod snapshot;
pub mod timeline;
pub mod types;
pub mod visibility;
pub mod year;

pub use activity::Activity;
pub use calendar::{ContributionLevel, DayContribution, aggregate, materialize};
pub use classify::{classify, weight};
pub use event::{EventKind, EventRepo, RawEvent};
pub use event_type::{GithubEventType, UnknownEventType};
pub use generation::{FetchGeneration, SnapshotSlot, Ticket};
pub use languages::{LanguageBreakdown, LanguageShare, normalize_language_key};
pub use project::{OngoingProject, Project, ongoing_project};
pub use readme::decode_readme;
pub use snapshot::ContributionSnapshot;
pub use timeline::{MonthBucket, group, group_with_languages};
pub use types::{RepoName, Username, ValidationError};
pub use visibility::{VisibilityState, VisibilityWindow, compute_visible};
pub use year::YearWindow;
