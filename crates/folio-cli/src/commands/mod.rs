//! CLI subcommand implementations.

pub mod contributions;
pub mod overview;
pub mod project;
pub mod projects;
pub mod stars;
pub mod theme;
pub mod util;
