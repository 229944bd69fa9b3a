use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gale_lookup::{CommunityIndex, CommunityStatus, ThunderstoreClient};

use crate::error::CliError;

/// Report whether `slug` is a Thunderstore community.
pub(crate) fn run_check_slug(slug: &str) -> Result<(), CliError> {
    let client = ThunderstoreClient::new()?;
    log::debug!("GET {}", client.community_url(slug));
    check_slug(&client, slug)?;
    Ok(())
}

fn check_slug(index: &dyn CommunityIndex, slug: &str) -> Result<CommunityStatus, CliError> {
    let status = index.community_status(slug)?;
    match status {
        CommunityStatus::Exists => log::info!(
            "{} {slug} exists on thunderstore.io",
            "\u{2714}".if_supports_color(Stdout, |t| t.green())
        ),
        CommunityStatus::Missing => log::info!(
            "{} {slug} is not a community on thunderstore.io",
            "\u{2718}".if_supports_color(Stdout, |t| t.red())
        ),
        CommunityStatus::Unknown(code) => {
            log::warn!("thunderstore.io answered HTTP {code} for {slug}")
        }
    }
    Ok(status)
}
