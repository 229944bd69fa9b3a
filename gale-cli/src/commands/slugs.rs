use std::fs;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gale_catalog::{CatalogStore, find_slug_collisions, render_slug_array, replace_communities};

use crate::error::CliError;
use crate::settings::ResolvedPaths;

/// Print the catalog's slugs as a TOML array, or with `write`, replace the
/// communities list in `thunderstore.toml` with them.
pub(crate) fn run_slugs(paths: &ResolvedPaths, write: bool) -> Result<(), CliError> {
    let records = CatalogStore::new(paths.catalog()).load()?;

    for (slug, names) in find_slug_collisions(&records) {
        log::warn!("Slug {slug} is shared by {}", names.join(", "));
    }

    let slugs: Vec<String> = records
        .iter()
        .map(|r| r.effective_slug().into_owned())
        .collect();

    if !write {
        println!("{}", render_slug_array(&slugs));
        return Ok(());
    }

    let mut sorted = slugs;
    sorted.sort();
    sorted.dedup();

    let contents = fs::read_to_string(paths.communities())?;
    let updated = replace_communities(&contents, &sorted)?;
    if updated == contents {
        log::info!("{} is up to date", paths.communities().display());
        return Ok(());
    }

    super::write_atomic(paths.communities(), &updated)?;
    log::info!(
        "{} Wrote {} communities to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        sorted.len(),
        paths.communities().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{COMMUNITIES, Project};

    const CATALOG: &str = r#"[
        {"name": "Risk of Rain 2", "modLoader": {"name": "BepInEx"}},
        {"name": "Among Us", "modLoader": {"name": "BepInEx"}},
        {"name": "Webfishing", "slug": "webfishing", "modLoader": {"name": "GDWeave"}}
    ]"#;

    #[test]
    fn test_write_replaces_array_sorted() {
        let project = Project::new();
        fs::write(project.paths.catalog(), CATALOG).unwrap();

        run_slugs(&project.paths, true).unwrap();

        let doc: toml::Table = project.communities().parse().unwrap();
        let communities: Vec<&str> = doc["publish"]["communities"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(communities, ["among-us", "risk-of-rain-2", "webfishing"]);
        assert!(project.communities().starts_with("# Thunderstore CLI config\n"));
    }

    #[test]
    fn test_print_leaves_file_alone() {
        let project = Project::new();
        run_slugs(&project.paths, false).unwrap();
        assert_eq!(project.communities(), COMMUNITIES);
    }

    #[test]
    fn test_write_without_array_fails() {
        let project = Project::new();
        fs::write(project.paths.communities(), "[general]\n").unwrap();
        assert!(matches!(
            run_slugs(&project.paths, true),
            Err(CliError::Communities(_))
        ));
    }
}
