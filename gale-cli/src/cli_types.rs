//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gale-tools")]
#[command(about = "Maintain the game catalog, icons, and community list", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub paths: PathArgs,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Locations of the files the tools operate on.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct PathArgs {
    /// Project root the default paths are relative to (defaults to current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Path to games.json (default: <root>/src-tauri/games.json)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Path to thunderstore.toml (default: <root>/thunderstore.toml)
    #[arg(long, global = true)]
    pub communities: Option<PathBuf>,

    /// Directory holding game icons (default: <root>/images/games)
    #[arg(long, global = true)]
    pub icons_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Interactively add a new game to the catalog
    Add,

    /// Re-sort the catalog: popular games first, then by name
    Sort,

    /// Convert icons to 256x256 WebP
    Icons {
        /// Directory to process (defaults to the icons directory)
        dir: Option<PathBuf>,
    },

    /// Print the catalog's slugs as a TOML array
    Slugs {
        /// Rewrite the communities array in thunderstore.toml instead of printing
        #[arg(long)]
        write: bool,
    },

    /// Check whether a community exists on thunderstore.io
    CheckSlug {
        /// Slug to check
        slug: String,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved paths and where each one came from
    Show,

    /// Print the settings file path
    Path,
}
