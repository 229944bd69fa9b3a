//! Resolving Steam app ids by game name.
//!
//! Steam publishes the full app list as one large JSON document, so it is
//! cached on disk and only refetched once a day.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LookupError;

const APP_LIST_URL: &str = "https://api.steampowered.com/ISteamApps/GetAppList/v2/";
const CACHE_MAX_AGE_HOURS: i64 = 24;

/// One entry of Steam's app list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SteamApp {
    pub appid: u32,
    pub name: String,
}

#[derive(Deserialize)]
struct AppListResponse {
    applist: AppList,
}

#[derive(Deserialize)]
struct AppList {
    #[serde(default)]
    apps: Vec<SteamApp>,
}

/// Parse the body of a `GetAppList/v2` response.
pub fn parse_app_list(json: &str) -> Result<Vec<SteamApp>, LookupError> {
    let response: AppListResponse = serde_json::from_str(json)?;
    Ok(response.applist.apps)
}

/// The app list as stored in the on-disk cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SteamAppCache {
    pub fetched_at: DateTime<Utc>,
    pub apps: Vec<SteamApp>,
}

impl SteamAppCache {
    pub fn new(apps: Vec<SteamApp>) -> Self {
        Self {
            fetched_at: Utc::now(),
            apps,
        }
    }

    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.fetched_at) < TimeDelta::hours(CACHE_MAX_AGE_HOURS)
    }

    /// First app whose name matches, ignoring case.
    pub fn find_app_id(&self, name: &str) -> Option<u32> {
        let wanted = name.to_lowercase();
        self.apps
            .iter()
            .find(|app| app.name.to_lowercase() == wanted)
            .map(|app| app.appid)
    }

    /// Read a cache file. Returns `Ok(None)` if there is none yet.
    pub fn load(path: &Path) -> Result<Option<Self>, LookupError> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)?;
        let cache = serde_json::from_str(&contents).map_err(|e| {
            LookupError::cache(format!("unreadable cache {}: {e}", path.display()))
        })?;
        Ok(Some(cache))
    }

    pub fn save(&self, path: &Path) -> Result<(), LookupError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string(self)?)?;
        Ok(())
    }
}

/// Default location of the app list cache.
pub fn default_cache_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("gale-tools").join("steam_app_list.json"))
}

/// Something that can map a game name to a Steam app id.
pub trait AppDirectory {
    fn find_app_id(&self, name: &str) -> Result<Option<u32>, LookupError>;
}

/// Blocking client for Steam's app list with a day-long disk cache.
pub struct SteamClient {
    http: reqwest::blocking::Client,
    url: String,
    cache_path: Option<PathBuf>,
}

impl SteamClient {
    pub fn new() -> Result<Self, LookupError> {
        Ok(Self {
            http: crate::http_client()?,
            url: APP_LIST_URL.to_string(),
            cache_path: default_cache_path(),
        })
    }

    /// Use a specific cache file instead of the per-user cache directory.
    pub fn with_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = Some(path.into());
        self
    }

    /// The app list, from cache if fresh, otherwise downloaded and re-cached.
    pub fn app_list(&self) -> Result<SteamAppCache, LookupError> {
        if let Some(path) = &self.cache_path {
            match SteamAppCache::load(path) {
                Ok(Some(cache)) if cache.is_fresh(Utc::now()) => {
                    log::debug!("Using cached Steam app list from {}", path.display());
                    return Ok(cache);
                }
                Ok(_) => {}
                Err(e) => log::warn!("Ignoring Steam app list cache: {e}"),
            }
        }

        let cache = SteamAppCache::new(self.fetch()?);

        if let Some(path) = &self.cache_path {
            if let Err(e) = cache.save(path) {
                log::warn!("Failed to write Steam app list cache: {e}");
            }
        }

        Ok(cache)
    }

    fn fetch(&self) -> Result<Vec<SteamApp>, LookupError> {
        log::debug!("Fetching Steam app list from {}", self.url);
        let resp = self.http.get(&self.url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        parse_app_list(&resp.text()?)
    }
}

impl AppDirectory for SteamClient {
    fn find_app_id(&self, name: &str) -> Result<Option<u32>, LookupError> {
        Ok(self.app_list()?.find_app_id(name))
    }
}

#[cfg(test)]
#[path = "tests/steam_tests.rs"]
mod tests;
