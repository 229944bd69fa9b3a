//! Data model types for the game catalog.
//!
//! These mirror the shape of a `games.json` entry. Fields the tools don't
//! interpret (`server`, `r2dirName`, loader `subdirs`, ...) are kept in
//! flattened `extra` maps so a load/save cycle never drops data.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::layout::KeyOrder;
use crate::slug::derive_slug;

// ── Mod loader ──────────────────────────────────────────────────────────────

/// The injection framework a game's mods are installed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModLoaderKind {
    BepInEx,
    BepisLoader,
    MelonLoader,
    GDWeave,
    Shimloader,
    Lovely,
    Northstar,
    ReturnOfModding,
}

impl ModLoaderKind {
    /// Loaders offered by the interactive builder, in prompt order.
    pub const ALL: [ModLoaderKind; 8] = [
        Self::BepInEx,
        Self::MelonLoader,
        Self::GDWeave,
        Self::Shimloader,
        Self::Lovely,
        Self::Northstar,
        Self::ReturnOfModding,
        Self::BepisLoader,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BepInEx => "BepInEx",
            Self::BepisLoader => "BepisLoader",
            Self::MelonLoader => "MelonLoader",
            Self::GDWeave => "GDWeave",
            Self::Shimloader => "Shimloader",
            Self::Lovely => "Lovely",
            Self::Northstar => "Northstar",
            Self::ReturnOfModding => "ReturnOfModding",
        }
    }
}

impl fmt::Display for ModLoaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModLoaderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown mod loader '{s}'"))
    }
}

/// The `modLoader` object of a game record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModLoader {
    pub name: ModLoaderKind,
    /// Loader-specific fields (`packageName`, `subdirs`, `files`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<ModLoaderKind> for ModLoader {
    fn from(name: ModLoaderKind) -> Self {
        Self {
            name,
            extra: Map::new(),
        }
    }
}

// ── Platforms ───────────────────────────────────────────────────────────────

/// A storefront a game can be bought from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Steam,
    EpicGames,
    XboxStore,
    Oculus,
    Origin,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Self::Steam,
        Self::EpicGames,
        Self::XboxStore,
        Self::Oculus,
        Self::Origin,
    ];

    /// The key used for this platform in the `platforms` object.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Steam => "steam",
            Self::EpicGames => "epicGames",
            Self::XboxStore => "xboxStore",
            Self::Oculus => "oculus",
            Self::Origin => "origin",
        }
    }

    /// Human-facing label, e.g. "Epic Games".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Steam => "Steam",
            Self::EpicGames => "Epic Games",
            Self::XboxStore => "Xbox Store",
            Self::Oculus => "Oculus",
            Self::Origin => "Origin",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Steam payload: the numeric app id and, if it differs from the game name,
/// the folder under `steamapps/common`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SteamPlatform {
    pub id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SteamPlatform {
    pub fn new(id: u32, dir_name: Option<String>) -> Self {
        Self {
            id,
            dir_name,
            extra: Map::new(),
        }
    }
}

/// Payload for stores that address games by an opaque identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreIdentifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StoreIdentifier {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: Some(identifier.into()),
            extra: Map::new(),
        }
    }
}

/// Payload for platforms that carry no data of their own (usually `{}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoPayload {
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `platforms` object of a game record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Platforms {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steam: Option<SteamPlatform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epic_games: Option<StoreIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xbox_store: Option<StoreIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oculus: Option<NoPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<NoPayload>,
    /// Platforms this tool doesn't know about, kept verbatim.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Platforms {
    pub fn has(&self, platform: Platform) -> bool {
        match platform {
            Platform::Steam => self.steam.is_some(),
            Platform::EpicGames => self.epic_games.is_some(),
            Platform::XboxStore => self.xbox_store.is_some(),
            Platform::Oculus => self.oculus.is_some(),
            Platform::Origin => self.origin.is_some(),
        }
    }

    /// Known platforms present on this record, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Platform> + '_ {
        Platform::ALL.into_iter().filter(|p| self.has(*p))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none() && self.other.is_empty()
    }
}

// ── Game record ─────────────────────────────────────────────────────────────

/// One entry of `games.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub name: String,
    /// Community identifier. When absent, consumers derive it from `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub mod_loader: ModLoader,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Platforms>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popular: Option<bool>,
    /// Remaining top-level fields (`server`, `r2dirName`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// Key order as authored, captured on load and reapplied on save.
    #[serde(skip)]
    pub layout: KeyOrder,
}

impl GameRecord {
    pub fn new(name: impl Into<String>, mod_loader: impl Into<ModLoader>) -> Self {
        Self {
            name: name.into(),
            slug: None,
            mod_loader: mod_loader.into(),
            platforms: None,
            popular: None,
            extra: Map::new(),
            layout: KeyOrder::default(),
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_platforms(mut self, platforms: Platforms) -> Self {
        self.platforms = Some(platforms);
        self
    }

    pub fn with_popular(mut self, popular: bool) -> Self {
        self.popular = Some(popular);
        self
    }

    pub fn is_popular(&self) -> bool {
        self.popular.unwrap_or(false)
    }

    /// The explicit slug if set and non-empty, otherwise one derived from the name.
    pub fn effective_slug(&self) -> Cow<'_, str> {
        match self.slug.as_deref() {
            Some(slug) if !slug.is_empty() => Cow::Borrowed(slug),
            _ => Cow::Owned(derive_slug(&self.name)),
        }
    }
}
