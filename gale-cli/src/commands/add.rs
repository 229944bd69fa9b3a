use std::fmt;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gale_catalog::{
    CatalogStore, GameRecord, ModLoaderKind, NoPayload, Platform, Platforms, SteamPlatform,
    StoreIdentifier, derive_slug, insert_community,
};
use gale_icons::{IconOutcome, find_icon, normalize_icon};
use gale_lookup::{AppDirectory, CommunityIndex, CommunityStatus, SteamClient, ThunderstoreClient};

use crate::error::CliError;
use crate::prompt::Prompter;
use crate::settings::ResolvedPaths;

/// External services consulted while building a record.
pub(crate) struct Lookups<'a> {
    pub communities: &'a dyn CommunityIndex,
    pub apps: &'a dyn AppDirectory,
}

/// Interactively add a game, then write it to the catalog and the
/// communities list.
pub(crate) fn run_add(paths: &ResolvedPaths) -> Result<(), CliError> {
    let thunderstore = ThunderstoreClient::new()?;
    let steam = SteamClient::new()?;
    let lookups = Lookups {
        communities: &thunderstore,
        apps: &steam,
    };

    add_game(&mut Prompter::stdio(), &lookups, paths)?;
    Ok(())
}

pub(crate) fn add_game<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    lookups: &Lookups<'_>,
    paths: &ResolvedPaths,
) -> Result<GameRecord, CliError> {
    // Load up front so a broken catalog fails before any questions.
    let store = CatalogStore::new(paths.catalog());
    let existing = store.load()?;
    log::debug!("Loaded {} games from {}", existing.len(), paths.catalog().display());

    let name = prompter.ask_non_empty("Enter the name of the game:")?;
    let slug = resolve_slug(prompter, lookups.communities, &existing, &name)?;
    let mod_loader = choose_mod_loader(prompter, &name)?;
    let platforms = choose_platforms(prompter, lookups.apps, &name)?;
    place_icon(prompter, paths.icons(), &slug)?;

    // Nothing is written until both files are known to accept the game.
    let contents = fs::read_to_string(paths.communities())?;
    let updated = insert_community(&contents, &slug)?;

    let record = GameRecord::new(name, mod_loader)
        .with_slug(slug.as_str())
        .with_platforms(platforms);
    let record = store.append(record)?;
    log::info!(
        "Inserted {} into {}",
        record.name.if_supports_color(Stdout, |t| t.bold()),
        paths.catalog().display()
    );

    if updated == contents {
        log::info!("{slug} is already listed in {}", paths.communities().display());
    } else {
        super::write_atomic(paths.communities(), &updated)?;
        log::info!(
            "Inserted {} into {}",
            slug.if_supports_color(Stdout, |t| t.bold()),
            paths.communities().display()
        );
    }

    log::info!("{}", "Done!".if_supports_color(Stdout, |t| t.green()));
    Ok(record)
}

/// Start from the derived slug and ask until we have one that is unused in
/// the catalog and that the community index accepts.
fn resolve_slug<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    index: &dyn CommunityIndex,
    existing: &[GameRecord],
    name: &str,
) -> Result<String, CliError> {
    let mut slug = derive_slug(name);

    loop {
        if let Some(other) = existing.iter().find(|r| r.effective_slug() == slug) {
            prompter.say(format!("Slug {slug} is already used by {}", other.name))?;
        } else {
            log::info!(
                "{}",
                format!("Checking slug {slug} on thunderstore.io")
                    .if_supports_color(Stdout, |t| t.dimmed())
            );
            match index.community_status(&slug) {
                Ok(CommunityStatus::Exists) => return Ok(slug),
                Ok(CommunityStatus::Missing) => {
                    prompter.say(format!("No Thunderstore community found for {slug}"))?;
                }
                Ok(CommunityStatus::Unknown(status)) => {
                    prompter.say(format!("Thunderstore answered HTTP {status} for {slug}"))?;
                    if prompter.confirm(&format!("Use {slug} anyway?"), false)? {
                        return Ok(slug);
                    }
                }
                Err(e) => {
                    log::warn!("Could not check {slug}: {e}");
                    if prompter.confirm(&format!("Use {slug} anyway?"), false)? {
                        return Ok(slug);
                    }
                }
            }
        }

        slug = prompter.ask_non_empty("Enter the game's slug on thunderstore.io:")?;
    }
}

fn choose_mod_loader<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    name: &str,
) -> Result<ModLoaderKind, CliError> {
    let choice = prompter.choose(
        &format!("Which mod loader does {name} use?"),
        &ModLoaderKind::ALL,
        Some(0),
    )?;
    Ok(ModLoaderKind::ALL[choice])
}

enum PlatformChoice {
    Add(Platform),
    Done,
}

impl fmt::Display for PlatformChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add(platform) => f.write_str(platform.label()),
            Self::Done => f.write_str("No, continue"),
        }
    }
}

/// Ask for platforms until the operator is done. The first pick is
/// mandatory; each platform can be picked once.
fn choose_platforms<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    apps: &dyn AppDirectory,
    name: &str,
) -> Result<Platforms, CliError> {
    let mut remaining = Platform::ALL.to_vec();
    let mut platforms = Platforms::default();

    while !remaining.is_empty() {
        let mut options: Vec<PlatformChoice> =
            remaining.iter().copied().map(PlatformChoice::Add).collect();
        let (question, default) = if platforms.is_empty() {
            (format!("Which platform is {name} available on?"), 0)
        } else {
            options.push(PlatformChoice::Done);
            (
                format!("Is {name} available on any other platforms?"),
                options.len() - 1,
            )
        };

        let choice = prompter.choose(&question, &options, Some(default))?;
        let &PlatformChoice::Add(platform) = &options[choice] else {
            break;
        };

        match platform {
            Platform::Steam => platforms.steam = Some(steam_payload(prompter, apps, name)?),
            Platform::EpicGames => {
                platforms.epic_games = Some(store_identifier(prompter, name, platform)?);
            }
            Platform::XboxStore => {
                platforms.xbox_store = Some(store_identifier(prompter, name, platform)?);
            }
            Platform::Oculus => platforms.oculus = Some(NoPayload::default()),
            Platform::Origin => platforms.origin = Some(NoPayload::default()),
        }
        remaining.retain(|p| *p != platform);
    }

    Ok(platforms)
}

fn steam_payload<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    apps: &dyn AppDirectory,
    name: &str,
) -> Result<SteamPlatform, CliError> {
    let found = match apps.find_app_id(name) {
        Ok(Some(id)) => {
            log::info!("Resolved app ID from Steam API: {id}");
            Some(id)
        }
        Ok(None) => {
            log::info!("Could not find {name} in the Steam app list");
            None
        }
        Err(e) => {
            log::warn!("Steam app list unavailable: {e}");
            None
        }
    };
    let id = match found {
        Some(id) => id,
        None => prompter.ask_parsed(&format!("What is the Steam app ID for {name}?"))?,
    };

    let dir_name = prompter.ask(&format!(
        "What is the internal folder name on Steam for {name}? (leave blank to use \"{name}\")"
    ))?;

    Ok(SteamPlatform::new(
        id,
        (!dir_name.is_empty()).then_some(dir_name),
    ))
}

fn store_identifier<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    name: &str,
    platform: Platform,
) -> Result<StoreIdentifier, CliError> {
    let identifier = prompter.ask_non_empty(&format!(
        "What's {name}'s internal identifier on {}?",
        platform.label()
    ))?;
    Ok(StoreIdentifier::new(identifier))
}

/// Wait for the operator to drop an icon named after the slug into the
/// icons directory, then normalize it.
fn place_icon<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    icons_dir: &Path,
    slug: &str,
) -> Result<IconOutcome, CliError> {
    prompter.say(format!(
        "Add a square image to {} named {} (png, jpg and webp supported)",
        icons_dir.display().if_supports_color(Stdout, |t| t.bold()),
        slug.if_supports_color(Stdout, |t| t.bold())
    ))?;

    loop {
        prompter.pause("(press enter to continue)")?;

        let Some(icon) = find_icon(icons_dir, slug) else {
            prompter.say("Icon not found, try again")?;
            continue;
        };

        prompter.say("Icon found, resizing and optimizing...")?;
        match normalize_icon(&icon) {
            Ok(outcome) => {
                log::debug!("{outcome:?}");
                return Ok(outcome);
            }
            Err(e) => log::warn!("{}: {e}", icon.display()),
        }
    }
}
