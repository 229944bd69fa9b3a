//! Lookups against external services used while adding a game: the
//! Thunderstore community index and Steam's public app list.
//!
//! Every failure here is recoverable. Callers fall back to asking the
//! operator for the value.

pub mod error;
pub mod steam;
pub mod thunderstore;

pub use error::LookupError;
pub use steam::{AppDirectory, SteamApp, SteamAppCache, SteamClient};
pub use thunderstore::{CommunityIndex, CommunityStatus, ThunderstoreClient};

use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn http_client() -> Result<reqwest::blocking::Client, LookupError> {
    Ok(reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("gale-tools/", env!("CARGO_PKG_VERSION")))
        .build()?)
}
