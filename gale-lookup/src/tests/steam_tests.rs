use chrono::{TimeDelta, Utc};

use super::*;

const RESPONSE: &str = r#"{
    "applist": {
        "apps": [
            {"appid": 1966720, "name": "Lethal Company"},
            {"appid": 632360, "name": "Risk of Rain 2"},
            {"appid": 632361, "name": "Risk of Rain 2 Dedicated Server"}
        ]
    }
}"#;

fn sample_cache() -> SteamAppCache {
    SteamAppCache::new(parse_app_list(RESPONSE).unwrap())
}

#[test]
fn test_parse_app_list() {
    let apps = parse_app_list(RESPONSE).unwrap();
    assert_eq!(apps.len(), 3);
    assert_eq!(apps[0].appid, 1966720);
    assert_eq!(apps[1].name, "Risk of Rain 2");
}

#[test]
fn test_parse_app_list_without_apps() {
    let apps = parse_app_list(r#"{"applist": {}}"#).unwrap();
    assert!(apps.is_empty());
}

#[test]
fn test_parse_app_list_rejects_other_shapes() {
    assert!(parse_app_list(r#"{"response": {}}"#).is_err());
}

#[test]
fn test_find_app_id_ignores_case() {
    let cache = sample_cache();
    assert_eq!(cache.find_app_id("risk of rain 2"), Some(632360));
    assert_eq!(cache.find_app_id("LETHAL COMPANY"), Some(1966720));
}

#[test]
fn test_find_app_id_requires_full_name() {
    let cache = sample_cache();
    assert_eq!(cache.find_app_id("Risk of Rain"), None);
    assert_eq!(cache.find_app_id("Hollow Knight"), None);
}

#[test]
fn test_cache_freshness_boundary() {
    let mut cache = sample_cache();
    let now = Utc::now();

    cache.fetched_at = now - TimeDelta::hours(23);
    assert!(cache.is_fresh(now));

    cache.fetched_at = now - TimeDelta::hours(24);
    assert!(!cache.is_fresh(now));
}

#[test]
fn test_cache_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("steam_app_list.json");

    assert!(SteamAppCache::load(&path).unwrap().is_none());

    let cache = sample_cache();
    cache.save(&path).unwrap();

    let loaded = SteamAppCache::load(&path).unwrap().unwrap();
    assert_eq!(loaded.apps, cache.apps);
    assert_eq!(loaded.fetched_at, cache.fetched_at);
}

#[test]
fn test_corrupt_cache_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("steam_app_list.json");
    std::fs::write(&path, "not json").unwrap();
    assert!(matches!(
        SteamAppCache::load(&path),
        Err(LookupError::Cache(_))
    ));
}
