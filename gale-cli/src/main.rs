//! gale-tools CLI
//!
//! Maintenance tools for the game catalog: add games interactively, keep
//! `games.json` sorted, normalize icons, and keep the community list in
//! `thunderstore.toml` in sync.

mod cli_types;
mod commands;
mod error;
mod logger;
mod prompt;
mod settings;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;
use settings::{ResolvedPaths, Settings};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Failed to open log file: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        log::logger().flush();
        std::process::exit(1);
    }
    log::logger().flush();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = Settings::load()?;
    let cwd = std::env::current_dir()?;
    let paths = ResolvedPaths::resolve(&cli.paths, &settings, &cwd);
    log::debug!("Resolved paths: {paths:?}");

    match cli.command {
        Commands::Add => commands::add::run_add(&paths),
        Commands::Sort => commands::sort::run_sort(&paths),
        Commands::Icons { dir } => {
            let dir = dir.map(|d| cwd.join(d));
            commands::icons::run_icons(dir.as_deref().unwrap_or(paths.icons()), cli.quiet)
        }
        Commands::Slugs { write } => commands::slugs::run_slugs(&paths, write),
        Commands::CheckSlug { slug } => commands::check_slug::run_check_slug(&slug),
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show(&paths);
                Ok(())
            }
            ConfigAction::Path => commands::config::run_config_path(),
        },
    }
}
