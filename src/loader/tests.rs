//! Tests for loader module

use super::*;
use crate::error::Error;
use serde_json::json;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// String Loading Tests
// ============================================================================

#[test]
fn test_load_empty_array() {
    let records = load_environments_from_str("[]").unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_load_preserves_order() {
    let json = r#"[
        {"name": "first"},
        {"name": "second", "releaseWindows": []},
        {"name": "third", "releaseWindows": null}
    ]"#;

    let records = load_environments_from_str(json).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["name"], json!("first"));
    assert_eq!(records[1]["name"], json!("second"));
    assert_eq!(records[2]["name"], json!("third"));
}

#[test]
fn test_load_keeps_unknown_fields() {
    let json = r#"[{"name": "envA", "owner": {"team": "infra"}}]"#;

    let records = load_environments_from_str(json).unwrap();
    assert_eq!(records[0]["owner"]["team"], json!("infra"));
}

#[test]
fn test_load_invalid_json() {
    let err = load_environments_from_str("[{\"name\": ").unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));
}

#[test]
fn test_load_top_level_object_rejected() {
    let err = load_environments_from_str(r#"{"name": "envA"}"#).unwrap_err();
    assert!(matches!(err, Error::Schema { .. }));
    assert!(err.to_string().contains("found an object"));
}

#[test]
fn test_load_non_object_element_rejected() {
    let err = load_environments_from_str(r#"[{"name": "ok"}, "envB"]"#).unwrap_err();
    assert!(matches!(err, Error::Schema { .. }));
    assert!(err.to_string().contains("index 1 is a string"));
}

#[test]
fn test_load_null_element_rejected() {
    let err = load_environments_from_str("[null]").unwrap_err();
    assert!(err.to_string().contains("index 0 is null"));
}

// ============================================================================
// File Loading Tests
// ============================================================================

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("environments.json");
    fs::write(
        &path,
        r#"[{"name": "envA", "region": "eu-west-1", "releaseWindows": [{"id": 1}]}]"#,
    )
    .unwrap();

    let records = load_environments(&path).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["region"], json!("eu-west-1"));
}

#[test]
fn test_load_from_file_utf8() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("environments.json");
    fs::write(&path, r#"[{"displayName": "Zürich – Prod"}]"#).unwrap();

    let records = load_environments(&path).unwrap();
    assert_eq!(records[0]["displayName"], json!("Zürich – Prod"));
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = load_environments(&path).unwrap_err();
    match err {
        Error::FileNotFound { path: p } => assert!(p.ends_with("missing.json")),
        other => panic!("Expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn test_load_directory_is_io_error() {
    let dir = tempdir().unwrap();

    let err = load_environments(dir.path()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
