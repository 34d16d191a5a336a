//! Integration tests loading definitions and messages from real files.

use std::fs;
use tempfile::TempDir;
use zapgen_core::{ApiRegistry, MessageCatalog};
use zapgen_registry::{FileRegistry, PropertiesCatalog};

#[test]
fn test_definitions_and_messages_round_trip_through_disk() {
    let temp_dir = TempDir::new().unwrap();
    let definitions = temp_dir.path().join("zap-api.json");
    let messages = temp_dir.path().join("Messages.properties");

    fs::write(
        &definitions,
        r#"{"components": [{"prefix": "ascan", "actions": [{"name": "scan", "parameters": [{"name": "url"}]}]}]}"#,
    )
    .unwrap();
    fs::write(
        &messages,
        "ascan.api.action.scan = Runs the active scanner against the given URL\n",
    )
    .unwrap();

    let registry = FileRegistry::from_path(&definitions).unwrap();
    let catalog = PropertiesCatalog::from_path(&messages).unwrap();

    let ascan = registry.component("ascan").unwrap();
    let tag = &ascan.actions[0].description_tag;
    assert_eq!(
        catalog.message(tag),
        Some("Runs the active scanner against the given URL")
    );
}

#[test]
fn test_missing_messages_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = PropertiesCatalog::from_path(temp_dir.path().join("absent.properties")).unwrap_err();
    assert!(err.is_io_error());
}

#[test]
fn test_invalid_definitions_file() {
    let temp_dir = TempDir::new().unwrap();
    let definitions = temp_dir.path().join("zap-api.json");
    fs::write(&definitions, "not json").unwrap();

    let err = FileRegistry::from_path(&definitions).unwrap_err();
    assert!(err.is_definition_error());
}
