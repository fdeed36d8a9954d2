//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (endpoint, timeout).
//! - Define the main `Config` structure combining connection, auth and
//!   default metadata.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).

use crate::constants::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::AuthConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the audit log service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Events endpoint URL (e.g., https://api.workos.com/events)
    pub endpoint: String,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
    /// Metadata attached to every event unless the event sets the same key
    #[serde(default)]
    pub global_metadata: BTreeMap<String, serde_json::Value>,
}

impl Config {
    /// Create a config for the default endpoint with the given API key.
    pub fn with_api_key(api_key: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::default(),
            auth: AuthConfig { api_key },
            global_metadata: BTreeMap::new(),
        }
    }

    /// Create a config targeting a specific endpoint.
    pub fn with_endpoint(endpoint: String, api_key: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                endpoint,
                ..ConnectionConfig::default()
            },
            auth: AuthConfig { api_key },
            global_metadata: BTreeMap::new(),
        }
    }
}
