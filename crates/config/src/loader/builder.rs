//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration.
//! - Support loading from `.env`, environment variables and direct builder methods.
//! - Validate and build the final `Config`.
//!
//! Invariants / Assumptions:
//! - Later layers win: builder calls made after `from_env()` override env values.
//! - The endpoint is normalized to have no trailing slash.

use secrecy::SecretString;
use std::collections::BTreeMap;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::types::{AuthConfig, Config, ConnectionConfig};

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    endpoint: Option<String>,
    api_key: Option<SecretString>,
    timeout: Option<Duration>,
    global_metadata: Option<BTreeMap<String, serde_json::Value>>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not
    /// loaded. Missing `.env` files are silently ignored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DotenvParse` or `ConfigError::DotenvIo` when the
    /// file exists but cannot be used. Error messages never include raw .env
    /// line contents.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the events endpoint.
    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: String) -> Self {
        self.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replace the global metadata.
    pub fn with_global_metadata(mut self, metadata: BTreeMap<String, serde_json::Value>) -> Self {
        self.global_metadata = Some(metadata);
        self
    }

    /// Add or replace one global metadata entry, keeping entries loaded earlier.
    pub fn with_global_metadata_entry(
        mut self,
        key: impl Into<String>,
        value: serde_json::Value,
    ) -> Self {
        self.global_metadata
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value);
        self
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingApiKey` when no API key was provided.
    /// - `ConfigError::InvalidEndpoint` when the endpoint is not an absolute http(s) URL.
    /// - `ConfigError::InvalidTimeout` when the timeout is zero or above the maximum.
    pub fn build(self) -> Result<Config, ConfigError> {
        let api_key = self.api_key.ok_or(ConfigError::MissingApiKey)?;

        let endpoint = validate_and_normalize_endpoint(
            self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT),
        )?;

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        validate_timeout(timeout)?;

        Ok(Config {
            connection: ConnectionConfig { endpoint, timeout },
            auth: AuthConfig { api_key },
            global_metadata: self.global_metadata.unwrap_or_default(),
        })
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn set_endpoint(&mut self, endpoint: Option<String>) {
        self.endpoint = endpoint;
    }

    pub(crate) fn set_api_key(&mut self, key: Option<SecretString>) {
        self.api_key = key;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_global_metadata(
        &mut self,
        metadata: Option<BTreeMap<String, serde_json::Value>>,
    ) {
        self.global_metadata = metadata;
    }
}

fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let secs = timeout.as_secs();
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            message: "timeout must be greater than 0 seconds".to_string(),
        });
    }
    if secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!(
                "timeout exceeds maximum allowed value of {} seconds",
                MAX_TIMEOUT_SECS
            ),
        });
    }
    Ok(())
}

pub(crate) fn validate_and_normalize_endpoint(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::InvalidEndpoint {
            message: "endpoint must not be empty".into(),
        });
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidEndpoint {
        message: format!(
            "must be an absolute http(s) URL (e.g. https://api.workos.com/events): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidEndpoint {
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidEndpoint {
            message: "host is required (e.g. https://api.workos.com/events)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
