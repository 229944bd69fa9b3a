//! Optional per-user settings and path resolution.
//!
//! The settings file lives at `~/.config/gale-tools/settings.toml`:
//!
//! ```toml
//! [paths]
//! catalog = "src-tauri/games.json"
//! communities = "thunderstore.toml"
//! icons = "images/games"
//! ```
//!
//! Relative paths are resolved against the project root.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli_types::PathArgs;
use crate::error::CliError;

const DEFAULT_CATALOG: &str = "src-tauri/games.json";
const DEFAULT_COMMUNITIES: &str = "thunderstore.toml";
const DEFAULT_ICONS: &str = "images/games";

/// Canonical path to the settings file.
pub(crate) fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gale-tools").join("settings.toml"))
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct Settings {
    #[serde(default)]
    pub paths: PathSettings,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct PathSettings {
    pub catalog: Option<PathBuf>,
    pub communities: Option<PathBuf>,
    pub icons: Option<PathBuf>,
}

impl Settings {
    /// Load the settings file. A missing file yields defaults; a file that
    /// exists but doesn't parse is an error.
    pub(crate) fn load() -> Result<Self, CliError> {
        let Some(path) = settings_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&contents)
            .map_err(|e| CliError::config(format!("{}: {e}", path.display())))
    }

    pub(crate) fn from_toml_str(contents: &str) -> Result<Self, CliError> {
        toml::from_str(contents).map_err(|e| CliError::config(e.to_string()))
    }
}

/// Where a resolved path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PathSource {
    Flag,
    SettingsFile,
    Default,
}

impl fmt::Display for PathSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => write!(f, "command line"),
            Self::SettingsFile => write!(f, "settings file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Every file location a command may need, fully resolved.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedPaths {
    pub root: PathBuf,
    pub catalog: (PathBuf, PathSource),
    pub communities: (PathBuf, PathSource),
    pub icons: (PathBuf, PathSource),
}

impl ResolvedPaths {
    /// Priority: command-line flag, then settings file, then default under root.
    pub(crate) fn resolve(args: &PathArgs, settings: &Settings, cwd: &Path) -> Self {
        let root = match &args.root {
            Some(r) => cwd.join(r),
            None => cwd.to_path_buf(),
        };

        let pick = |flag: &Option<PathBuf>, configured: &Option<PathBuf>, default: &str| {
            if let Some(p) = flag {
                (cwd.join(p), PathSource::Flag)
            } else if let Some(p) = configured {
                (root.join(p), PathSource::SettingsFile)
            } else {
                (root.join(default), PathSource::Default)
            }
        };

        let catalog = pick(&args.catalog, &settings.paths.catalog, DEFAULT_CATALOG);
        let communities = pick(
            &args.communities,
            &settings.paths.communities,
            DEFAULT_COMMUNITIES,
        );
        let icons = pick(&args.icons_dir, &settings.paths.icons, DEFAULT_ICONS);

        Self {
            root,
            catalog,
            communities,
            icons,
        }
    }

    pub(crate) fn catalog(&self) -> &Path {
        &self.catalog.0
    }

    pub(crate) fn communities(&self) -> &Path {
        &self.communities.0
    }

    pub(crate) fn icons(&self) -> &Path {
        &self.icons.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_under_root() {
        let args = PathArgs {
            root: Some(PathBuf::from("gale")),
            ..Default::default()
        };
        let paths = ResolvedPaths::resolve(&args, &Settings::default(), Path::new("/work"));
        assert_eq!(paths.root, PathBuf::from("/work/gale"));
        assert_eq!(paths.catalog(), Path::new("/work/gale/src-tauri/games.json"));
        assert_eq!(paths.communities(), Path::new("/work/gale/thunderstore.toml"));
        assert_eq!(paths.icons(), Path::new("/work/gale/images/games"));
        assert_eq!(paths.catalog.1, PathSource::Default);
    }

    #[test]
    fn flag_beats_settings_beats_default() {
        let settings = Settings::from_toml_str(
            r#"
[paths]
catalog = "data/games.json"
icons = "/abs/icons"
"#,
        )
        .unwrap();
        let args = PathArgs {
            catalog: Some(PathBuf::from("override.json")),
            ..Default::default()
        };
        let paths = ResolvedPaths::resolve(&args, &settings, Path::new("/work"));

        assert_eq!(paths.catalog, (PathBuf::from("/work/override.json"), PathSource::Flag));
        assert_eq!(
            paths.icons,
            (PathBuf::from("/abs/icons"), PathSource::SettingsFile)
        );
        assert_eq!(paths.communities.1, PathSource::Default);
    }

    #[test]
    fn empty_settings_file_is_default() {
        let settings = Settings::from_toml_str("").unwrap();
        assert!(settings.paths.catalog.is_none());
    }

    #[test]
    fn invalid_settings_are_config_errors() {
        let err = Settings::from_toml_str("[paths]\ncatalog = 3\n").unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
