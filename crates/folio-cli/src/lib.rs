//! GitHub portfolio CLI library.
//!
//! This crate provides the `folio` command-line interface on top of
//! `folio-core` and `folio-github`.

mod cli;
pub mod commands;
mod config;
pub mod theme;

pub use cli::{Cli, Commands};
pub use config::Config;
