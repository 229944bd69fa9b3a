//! Fakes and fixtures shared by command tests.

use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use gale_lookup::{AppDirectory, CommunityIndex, CommunityStatus, LookupError};

use crate::cli_types::PathArgs;
use crate::prompt::Prompter;
use crate::settings::{ResolvedPaths, Settings};

pub(crate) const CATALOG: &str = r#"[
    {
        "name": "Lethal Company",
        "modLoader": {
            "name": "BepInEx"
        },
        "platforms": {
            "steam": {
                "id": 1966720
            }
        },
        "popular": true
    },
    {
        "name": "Webfishing",
        "slug": "webfishing",
        "modLoader": {
            "name": "GDWeave"
        },
        "platforms": {
            "steam": {
                "id": 3146520,
                "dirName": "WEBFISHING"
            }
        }
    }
]"#;

pub(crate) const COMMUNITIES: &str = r#"# Thunderstore CLI config
[config]
schemaVersion = "0.0.1"

[general]
repository = "https://thunderstore.io"

[publish]
communities = [
    "lethal-company",
    "webfishing",
]
"#;

/// A project root with a catalog, a communities file and an empty icons dir.
pub(crate) struct Project {
    _dir: tempfile::TempDir,
    pub paths: ResolvedPaths,
}

impl Project {
    pub(crate) fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src-tauri")).unwrap();
        fs::create_dir_all(dir.path().join("images/games")).unwrap();
        fs::write(dir.path().join("src-tauri/games.json"), CATALOG).unwrap();
        fs::write(dir.path().join("thunderstore.toml"), COMMUNITIES).unwrap();

        let args = PathArgs {
            root: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let paths = ResolvedPaths::resolve(&args, &Settings::default(), dir.path());
        Self { _dir: dir, paths }
    }

    pub(crate) fn icon(&self, file_name: &str) -> PathBuf {
        self.paths.icons().join(file_name)
    }

    pub(crate) fn communities(&self) -> String {
        fs::read_to_string(self.paths.communities()).unwrap()
    }
}

pub(crate) fn scripted(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

/// Community index answering from a fixed table; unknown slugs are missing.
#[derive(Default)]
pub(crate) struct FakeIndex {
    pub statuses: HashMap<String, CommunityStatus>,
    pub offline: bool,
}

impl FakeIndex {
    pub(crate) fn with(entries: &[(&str, CommunityStatus)]) -> Self {
        Self {
            statuses: entries
                .iter()
                .map(|(slug, status)| (slug.to_string(), *status))
                .collect(),
            offline: false,
        }
    }
}

impl CommunityIndex for FakeIndex {
    fn community_status(&self, slug: &str) -> Result<CommunityStatus, LookupError> {
        if self.offline {
            return Err(LookupError::UnexpectedStatus {
                status: 503,
                url: format!("https://thunderstore.io/c/{slug}/"),
            });
        }
        Ok(self
            .statuses
            .get(slug)
            .copied()
            .unwrap_or(CommunityStatus::Missing))
    }
}

/// App directory with a fixed name-to-id table.
#[derive(Default)]
pub(crate) struct FakeApps {
    pub apps: HashMap<String, u32>,
    pub offline: bool,
}

impl FakeApps {
    pub(crate) fn with(entries: &[(&str, u32)]) -> Self {
        Self {
            apps: entries.iter().map(|(n, id)| (n.to_string(), *id)).collect(),
            offline: false,
        }
    }
}

impl AppDirectory for FakeApps {
    fn find_app_id(&self, name: &str) -> Result<Option<u32>, LookupError> {
        if self.offline {
            return Err(LookupError::cache("offline"));
        }
        Ok(self.apps.get(name).copied())
    }
}
