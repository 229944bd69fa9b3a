use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;
use crate::settings::{self, PathSource, ResolvedPaths};

/// Show the settings file status and every resolved path with its source.
pub(crate) fn run_config_show(paths: &ResolvedPaths) {
    log::info!(
        "{}",
        "gale-tools Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    match settings::settings_path() {
        Some(p) if p.exists() => {
            log::info!(
                "  Settings file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Settings file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Settings file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    log::info!("  Root: {}", paths.root.display());
    log::info!("");

    let fields: [(&str, &(PathBuf, PathSource)); 3] = [
        ("catalog", &paths.catalog),
        ("communities", &paths.communities),
        ("icons", &paths.icons),
    ];
    for (name, (path, source)) in fields {
        log::info!(
            "  {} {} {} {}",
            format!("{name}:").if_supports_color(Stdout, |t| t.cyan()),
            path.display(),
            format!("({source})").if_supports_color(Stdout, |t| t.dimmed()),
            existence(path),
        );
    }
}

fn existence(path: &Path) -> String {
    if path.exists() {
        String::new()
    } else {
        "missing".if_supports_color(Stdout, |t| t.yellow()).to_string()
    }
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    match settings::settings_path() {
        Some(path) => {
            log::info!("{}", path.display());
            Ok(())
        }
        None => Err(CliError::config("could not determine config directory")),
    }
}
