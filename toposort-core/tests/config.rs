//! Configuration Tests
//!
//! Host applications pick a strategy from their own config files.

use serde::Deserialize;
use toposort_core::{Graph, SortMode};

#[derive(Debug, Deserialize)]
struct BuildConfig {
    #[serde(default)]
    sort: SortMode,
}

#[test]
fn mode_deserializes_from_config() {
    let config: BuildConfig = serde_json::from_str(r#"{ "sort": "kahn" }"#).unwrap();
    assert_eq!(config.sort, SortMode::Kahn);

    let config: BuildConfig = serde_json::from_str(r#"{ "sort": "dfs" }"#).unwrap();
    assert_eq!(config.sort, SortMode::DepthFirst);

    let config: BuildConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.sort, SortMode::DepthFirst);
}

#[test]
fn unknown_mode_is_rejected() {
    let result = serde_json::from_str::<BuildConfig>(r#"{ "sort": "random" }"#);
    assert!(result.is_err());
}

#[test]
fn mode_serializes_to_canonical_name() {
    assert_eq!(
        serde_json::to_string(&SortMode::DepthFirst).unwrap(),
        "\"depth-first\""
    );
    assert_eq!(serde_json::to_string(&SortMode::Kahn).unwrap(), "\"kahn\"");
}

#[test]
fn configured_mode_drives_sort() {
    let config: BuildConfig = serde_json::from_str(r#"{ "sort": "kahn" }"#).unwrap();

    let mut graph = Graph::new();
    let lib = graph.insert("lib");
    let app = graph.insert("app");
    graph.add_dependency(app, lib).unwrap();

    assert_eq!(graph.sort_all(config.sort).unwrap(), vec![lib, app]);
}

#[test]
fn node_ids_serialize_as_integers() {
    let mut graph = Graph::new();
    graph.insert(());
    let id = graph.insert(());
    assert_eq!(serde_json::to_string(&id).unwrap(), "1");
}
