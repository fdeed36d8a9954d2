//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse the `WORKOS_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::collections::BTreeMap;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_API_KEY, ENV_ENDPOINT, ENV_GLOBAL_METADATA, ENV_TIMEOUT};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(key) = env_var_or_none(ENV_API_KEY) {
        loader.set_api_key(Some(SecretString::new(key.into())));
    }
    if let Some(endpoint) = env_var_or_none(ENV_ENDPOINT) {
        loader.set_endpoint(Some(endpoint));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(raw) = env_var_or_none(ENV_GLOBAL_METADATA) {
        loader.set_global_metadata(Some(parse_metadata_object(ENV_GLOBAL_METADATA, &raw)?));
    }
    Ok(())
}

/// Parse a JSON object into a metadata map.
pub(crate) fn parse_metadata_object(
    var: &str,
    raw: &str,
) -> Result<BTreeMap<String, serde_json::Value>, ConfigError> {
    serde_json::from_str(raw).map_err(|e| ConfigError::InvalidValue {
        var: var.to_string(),
        message: format!("must be a JSON object: {e}"),
    })
}
