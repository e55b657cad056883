use super::*;
use std::io::Write;

#[test]
fn test_default_config() {
    let config = CatalogConfig::default();
    assert!(!config.memoize);
    assert_eq!(config.logging.filter, DEFAULT_LOG_FILTER);
    assert!(config.logging.json_file);
    assert_eq!(config.logging.log_dir, None);
}

#[test]
fn test_empty_object_uses_defaults() {
    let config: CatalogConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, CatalogConfig::default());
}

#[test]
fn test_camel_case_fields() {
    let json = r#"{"memoize": true, "logging": {"filter": "debug", "jsonFile": false, "logDir": "/tmp/logs"}}"#;
    let config: CatalogConfig = serde_json::from_str(json).unwrap();
    assert!(config.memoize);
    assert_eq!(config.logging.filter, "debug");
    assert!(!config.logging.json_file);
    assert_eq!(
        config.logging.log_dir.as_deref(),
        Some(std::path::Path::new("/tmp/logs"))
    );
}

#[test]
fn test_serialization_skips_none_log_dir() {
    let json = serde_json::to_string(&CatalogConfig::default()).unwrap();
    assert!(!json.contains("logDir"));
    assert!(json.contains("jsonFile"));
}

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"memoize": true}}"#).unwrap();

    let config = load_config_from(file.path());
    assert!(config.memoize);
    assert_eq!(config.logging, LoggingConfig::default());
}

#[test]
fn test_load_config_missing_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(dir.path().join("absent.json"));
    assert_eq!(config, CatalogConfig::default());
}

#[test]
fn test_load_config_invalid_json_falls_back() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "memoize = true").unwrap();

    let config = load_config_from(file.path());
    assert_eq!(config, CatalogConfig::default());
}

#[test]
fn test_config_path_file_name() {
    assert!(config_path().ends_with("storybook.json"));
}
