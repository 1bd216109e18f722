use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use folio_cli::commands::{contributions, overview, project, projects, stars, theme};
use folio_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so `--json` output stays parseable.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let mut stdout = io::stdout().lock();
    match command {
        Commands::Overview(args) => overview::run(&mut stdout, args, &config)?,
        Commands::Projects(args) => projects::run(&mut stdout, args, &config)?,
        Commands::Project(args) => project::run(&mut stdout, args, &config)?,
        Commands::Stars(args) => stars::run(&mut stdout, args, &config)?,
        Commands::Contributions(args) => contributions::run(&mut stdout, args, &config)?,
        Commands::Theme(args) => theme::run(&mut stdout, args, &config)?,
    }

    Ok(())
}
