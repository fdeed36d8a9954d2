//! Environment variable tests for the configuration loader builder.

use std::time::Duration;

use secrecy::ExposeSecret;
use serde_json::json;
use serial_test::serial;

use super::env_lock;
use crate::loader::builder::ConfigLoader;
use crate::loader::env::env_var_or_none;
use crate::loader::error::ConfigError;

const ALL_VARS: [&str; 4] = [
    "WORKOS_API_KEY",
    "WORKOS_AUDITLOG_ENDPOINT",
    "WORKOS_AUDITLOG_TIMEOUT",
    "WORKOS_AUDITLOG_GLOBAL_METADATA",
];

/// Run `f` with every config variable cleared, then the given ones set.
fn with_config_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
    let mut all: Vec<(&str, Option<&str>)> = ALL_VARS.iter().map(|k| (*k, None)).collect();
    for (key, value) in vars {
        all.retain(|(k, _)| k != key);
        all.push((*key, Some(*value)));
    }
    temp_env::with_vars(all, f);
}

#[test]
#[serial]
fn test_from_env_reads_all_variables() {
    let _lock = env_lock().lock().unwrap();

    with_config_env(
        &[
            ("WORKOS_API_KEY", "sk_env"),
            ("WORKOS_AUDITLOG_ENDPOINT", "http://localhost:9000/events"),
            ("WORKOS_AUDITLOG_TIMEOUT", "12"),
            ("WORKOS_AUDITLOG_GLOBAL_METADATA", r#"{"env":"staging"}"#),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();

            assert_eq!(config.auth.api_key.expose_secret(), "sk_env");
            assert_eq!(config.connection.endpoint, "http://localhost:9000/events");
            assert_eq!(config.connection.timeout, Duration::from_secs(12));
            assert_eq!(config.global_metadata["env"], json!("staging"));
        },
    );
}

#[test]
#[serial]
fn test_builder_overrides_env() {
    let _lock = env_lock().lock().unwrap();

    with_config_env(&[("WORKOS_API_KEY", "sk_env")], || {
        let config = ConfigLoader::new()
            .from_env()
            .unwrap()
            .with_api_key("sk_flag".to_string())
            .build()
            .unwrap();

        assert_eq!(config.auth.api_key.expose_secret(), "sk_flag");
    });
}

#[test]
#[serial]
fn test_empty_api_key_env_treated_as_unset() {
    let _lock = env_lock().lock().unwrap();

    with_config_env(&[("WORKOS_API_KEY", "   ")], || {
        let result = ConfigLoader::new().from_env().unwrap().build();
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    });
}

#[test]
#[serial]
fn test_invalid_timeout_env() {
    let _lock = env_lock().lock().unwrap();

    with_config_env(&[("WORKOS_AUDITLOG_TIMEOUT", "soon")], || {
        let result = ConfigLoader::new().from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "WORKOS_AUDITLOG_TIMEOUT")
            }
            Err(other) => panic!("expected InvalidValue, got {other}"),
            Ok(_) => panic!("expected InvalidValue, got Ok"),
        }
    });
}

#[test]
#[serial]
fn test_global_metadata_env_must_be_object() {
    let _lock = env_lock().lock().unwrap();

    with_config_env(&[("WORKOS_AUDITLOG_GLOBAL_METADATA", "[1,2,3]")], || {
        let result = ConfigLoader::new().from_env();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    });
}

#[test]
#[serial]
fn test_env_var_or_none_trims() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var("WORKOS_AUDITLOG_TEST_TRIM", Some("  value  "), || {
        assert_eq!(
            env_var_or_none("WORKOS_AUDITLOG_TEST_TRIM").as_deref(),
            Some("value")
        );
    });
    temp_env::with_var("WORKOS_AUDITLOG_TEST_TRIM", None::<&str>, || {
        assert!(env_var_or_none("WORKOS_AUDITLOG_TEST_TRIM").is_none());
    });
}
