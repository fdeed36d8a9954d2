//! Basic loader tests for the configuration loader builder.

use std::collections::BTreeMap;
use std::time::Duration;

use secrecy::ExposeSecret;
use serde_json::json;

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

#[test]
fn test_loader_with_api_key_uses_default_endpoint() {
    let config = ConfigLoader::new()
        .with_api_key("sk_test".to_string())
        .build()
        .unwrap();

    assert_eq!(config.auth.api_key.expose_secret(), "sk_test");
    assert_eq!(config.connection.endpoint, "https://api.workos.com/events");
    assert_eq!(config.connection.timeout, Duration::from_secs(30));
    assert!(config.global_metadata.is_empty());
}

#[test]
fn test_loader_missing_api_key() {
    let result = ConfigLoader::new()
        .with_endpoint("https://api.workos.com/events".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::MissingApiKey)));
}

#[test]
fn test_loader_normalizes_trailing_slash() {
    let config = ConfigLoader::new()
        .with_api_key("sk_test".to_string())
        .with_endpoint("http://localhost:8080/events/".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.endpoint, "http://localhost:8080/events");
}

#[test]
fn test_global_metadata_entries_accumulate() {
    let mut base = BTreeMap::new();
    base.insert("region".to_string(), json!("eu"));

    let config = ConfigLoader::new()
        .with_api_key("sk_test".to_string())
        .with_global_metadata(base)
        .with_global_metadata_entry("service", json!("billing"))
        .with_global_metadata_entry("region", json!("us"))
        .build()
        .unwrap();

    assert_eq!(config.global_metadata.len(), 2);
    assert_eq!(config.global_metadata["region"], json!("us"));
    assert_eq!(config.global_metadata["service"], json!("billing"));
}
