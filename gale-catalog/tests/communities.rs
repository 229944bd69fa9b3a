use gale_catalog::{CommunitiesError, insert_community, render_slug_array, replace_communities};

const TOML: &str = r#"[config]
schemaVersion = "0.0.1"

[publish]
repository = "https://thunderstore.io"
communities = [
    "content-warning",
    "lethal-company",
    "risk-of-rain-2",
]

[publish.categories]
"#;

fn communities(doc: &str) -> Vec<String> {
    let value: toml::Value = toml::from_str(doc).unwrap();
    value["publish"]["communities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

#[test]
fn render_empty_and_filled_arrays() {
    assert_eq!(render_slug_array::<&str>(&[]), "[\n]");
    assert_eq!(
        render_slug_array(&["a", "b"]),
        "[\n    \"a\",\n    \"b\",\n]"
    );
}

#[test]
fn insert_in_sorted_position() {
    let updated = insert_community(TOML, "hollow-knight").unwrap();
    assert_eq!(
        communities(&updated),
        vec!["content-warning", "hollow-knight", "lethal-company", "risk-of-rain-2"]
    );
}

#[test]
fn insert_at_start_and_end() {
    let first = insert_community(TOML, "among-us").unwrap();
    assert_eq!(communities(&first)[0], "among-us");

    let last = insert_community(TOML, "webfishing").unwrap();
    assert_eq!(communities(&last).last().unwrap(), "webfishing");
}

#[test]
fn insert_preserves_rest_of_document() {
    let updated = insert_community(TOML, "hollow-knight").unwrap();
    assert!(updated.starts_with("[config]\nschemaVersion = \"0.0.1\"\n\n[publish]\n"));
    assert!(updated.ends_with("]\n\n[publish.categories]\n"));
    assert_eq!(updated.lines().count(), TOML.lines().count() + 1);
}

#[test]
fn insert_existing_slug_is_noop() {
    assert_eq!(insert_community(TOML, "lethal-company").unwrap(), TOML);
}

#[test]
fn insert_into_empty_array() {
    let doc = "communities = [\n]\n";
    assert_eq!(
        insert_community(doc, "webfishing").unwrap(),
        "communities = [\n    \"webfishing\",\n]\n"
    );
}

#[test]
fn missing_or_unterminated_array() {
    assert_eq!(
        insert_community("[publish]\n", "x"),
        Err(CommunitiesError::MissingArray)
    );
    assert_eq!(
        insert_community("communities = [\n    \"a\",\n", "x"),
        Err(CommunitiesError::UnterminatedArray)
    );
}

#[test]
fn replace_rewrites_whole_array() {
    let updated = replace_communities(TOML, &["b-game", "a-game"]).unwrap();
    assert_eq!(communities(&updated), vec!["b-game", "a-game"]);
    assert!(updated.contains("[publish.categories]"));
}

#[test]
fn quotes_and_backslashes_are_escaped() {
    let slug = r#"odd"slug\name"#;
    let updated = insert_community(TOML, slug).unwrap();
    assert!(updated.contains(r#"    "odd\"slug\\name","#));
    assert!(communities(&updated).iter().any(|s| s == slug));

    let rendered = render_slug_array(&[slug, "tab\there"]);
    let parsed: toml::Value = toml::from_str(&format!("a = {rendered}")).unwrap();
    assert_eq!(
        parsed["a"].as_array().unwrap(),
        &vec![toml::Value::from(slug), toml::Value::from("tab\there")]
    );
}

#[test]
fn escaped_slug_already_listed_is_noop() {
    let once = insert_community(TOML, r#"a"b"#).unwrap();
    assert_eq!(insert_community(&once, r#"a"b"#).unwrap(), once);
}
