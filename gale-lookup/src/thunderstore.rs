//! Checking whether a community exists on thunderstore.io.

use crate::error::LookupError;

const BASE_URL: &str = "https://thunderstore.io";

/// What the community index says about a slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommunityStatus {
    /// The community page exists (2xx).
    Exists,
    /// The index answered 404: no community uses this slug.
    Missing,
    /// Any other status. The operator has to decide.
    Unknown(u16),
}

impl CommunityStatus {
    /// Only a 404 counts as missing; only 2xx counts as existing.
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => Self::Missing,
            200..=299 => Self::Exists,
            other => Self::Unknown(other),
        }
    }
}

/// Something that can tell whether a community slug is in use.
pub trait CommunityIndex {
    fn community_status(&self, slug: &str) -> Result<CommunityStatus, LookupError>;
}

/// Blocking client for the Thunderstore community pages.
pub struct ThunderstoreClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ThunderstoreClient {
    pub fn new() -> Result<Self, LookupError> {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, LookupError> {
        Ok(Self {
            http: crate::http_client()?,
            base_url: base_url.into(),
        })
    }

    pub fn community_url(&self, slug: &str) -> String {
        community_url(&self.base_url, slug)
    }
}

impl CommunityIndex for ThunderstoreClient {
    fn community_status(&self, slug: &str) -> Result<CommunityStatus, LookupError> {
        let url = self.community_url(slug);
        log::debug!("Checking community {url}");

        let resp = self.http.get(&url).send()?;
        let status = CommunityStatus::from_status(resp.status().as_u16());
        log::debug!("{url} -> {status:?}");
        Ok(status)
    }
}

pub(crate) fn community_url(base_url: &str, slug: &str) -> String {
    format!("{}/c/{}/", base_url.trim_end_matches('/'), slug)
}

#[cfg(test)]
#[path = "tests/thunderstore_tests.rs"]
mod tests;
