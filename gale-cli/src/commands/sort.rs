use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gale_catalog::CatalogStore;

use crate::error::CliError;
use crate::settings::ResolvedPaths;

/// Rewrite the catalog in canonical order.
pub(crate) fn run_sort(paths: &ResolvedPaths) -> Result<(), CliError> {
    let store = CatalogStore::new(paths.catalog());
    let count = store.sort()?;
    log::info!(
        "{} Sorted {count} games in {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        paths.catalog().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Project;

    #[test]
    fn test_sort_rewrites_catalog() {
        let project = Project::new();
        std::fs::write(
            project.paths.catalog(),
            r#"[{"name": "Zeta", "modLoader": {"name": "BepInEx"}},
                {"name": "Alpha", "modLoader": {"name": "BepInEx"}},
                {"name": "Mu", "modLoader": {"name": "BepInEx"}, "popular": true}]"#,
        )
        .unwrap();

        run_sort(&project.paths).unwrap();

        let names: Vec<String> = CatalogStore::new(project.paths.catalog())
            .load()
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["Mu", "Alpha", "Zeta"]);
    }
}
