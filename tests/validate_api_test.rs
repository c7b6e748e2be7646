//! Integration tests for the document validation public API.

use regex::Regex;
use std::fs;
use tempfile::TempDir;
use yamlvet::{
    load_document, validate, validate_file, FieldRule, Schema, ValidatedConfig, VetError,
};

fn service_schema() -> Schema {
    Schema::new()
        .field("name", FieldRule::string().length(1, 32))
        .field("retries", FieldRule::integer())
        .field("verbose", FieldRule::boolean())
        .field("limits", FieldRule::mapping())
        .field("mirrors", FieldRule::sequence().length(1, 4))
        .field("state_file", FieldRule::path())
        .field("endpoint", FieldRule::url())
        .field(
            "host",
            FieldRule::hostname().pattern(Regex::new("[a-z]").unwrap()),
        )
}

#[test]
fn full_document_workflow() {
    let temp = TempDir::new().unwrap();
    let state = temp.path().join("state.bin");
    fs::write(&state, "").unwrap();

    let config_path = temp.path().join("config.yml");
    fs::write(
        &config_path,
        format!(
            r#"
name: sync-agent
retries: 3
verbose: true
limits:
  cpu: 2
  memory: 512
mirrors:
  - eu-west
  - us-east
state_file: {}
endpoint: https://api.example.com/v1
host: node-1.example.com
"#,
            state.display()
        ),
    )
    .unwrap();

    let document = load_document(&config_path).unwrap();
    let config = validate(&document, &service_schema()).unwrap();

    assert_eq!(config.len(), 8);
    assert_eq!(config.get("name").and_then(|v| v.as_str()), Some("sync-agent"));
    assert_eq!(config.get("retries").and_then(|v| v.as_i64()), Some(3));
    assert_eq!(config.get("verbose").and_then(|v| v.as_bool()), Some(true));

    // Semantic fields keep their raw strings.
    let state_name = state.display().to_string();
    assert_eq!(
        config.get("endpoint").and_then(|v| v.as_str()),
        Some("https://api.example.com/v1")
    );
    assert_eq!(
        config.get("state_file").and_then(|v| v.as_str()),
        Some(state_name.as_str())
    );

    // Keys come back in document order.
    let keys: Vec<&str> = config.keys().collect();
    assert_eq!(keys.first(), Some(&"name"));
    assert_eq!(keys.last(), Some(&"host"));
}

#[test]
fn validate_file_in_one_step() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.yml");
    fs::write(&config_path, "name: demo\nretries: 1").unwrap();

    let config = validate_file(&config_path, &service_schema()).unwrap();
    assert_eq!(config.len(), 2);
}

#[test]
fn validate_file_reports_missing_document() {
    let temp = TempDir::new().unwrap();
    let result = validate_file(&temp.path().join("absent.yml"), &service_schema());
    assert!(matches!(result, Err(VetError::DocumentNotFound { .. })));
}

#[test]
fn declared_fields_may_be_omitted() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.yml");
    fs::write(&config_path, "name: minimal").unwrap();

    let config = validate_file(&config_path, &service_schema()).unwrap();
    assert_eq!(config.len(), 1);
    assert!(!config.contains_key("retries"));
}

#[test]
fn unknown_key_is_rejected() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.yml");
    fs::write(&config_path, "name: demo\nsurprise: 1").unwrap();

    let err = validate_file(&config_path, &service_schema()).unwrap_err();
    assert!(matches!(err, VetError::MissingKey { key } if key == "surprise"));
}

#[test]
fn first_violation_in_document_order_is_reported() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.yml");
    // Both values break their rules; "retries" comes first in the file.
    fs::write(&config_path, "retries: soon\nverbose: 1").unwrap();

    let err = validate_file(&config_path, &service_schema()).unwrap_err();
    assert!(matches!(err, VetError::IncorrectType { key, .. } if key == "retries"));
}

#[test]
fn semantic_violations_surface_their_own_kind() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.yml");
    fs::write(&config_path, "endpoint: h%tp://broken").unwrap();

    let err = validate_file(&config_path, &service_schema()).unwrap_err();
    assert!(matches!(err, VetError::InvalidUrl { url } if url == "h%tp://broken"));
}

#[test]
fn revalidating_a_validated_config_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.yml");
    fs::write(&config_path, "name: demo\nretries: 2\nverbose: false").unwrap();

    let schema = service_schema();
    let first: ValidatedConfig = validate_file(&config_path, &schema).unwrap();
    let second = validate(first.as_mapping(), &schema).unwrap();
    assert_eq!(first, second);

    let third = validate(&second.into_mapping(), &schema).unwrap();
    assert_eq!(first, third);
}
