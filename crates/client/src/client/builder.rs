//! Client builder for constructing [`AuditLogClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating the endpoint URL and requiring an API key
//! - Normalizing the endpoint (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, redirects)
//!
//! # Invariants
//! - The endpoint defaults to the public events endpoint when not set.
//! - The endpoint is always an absolute http(s) URL without a trailing slash.

use std::time::Duration;

use auditlog_config::{
    Config,
    constants::{DEFAULT_ENDPOINT, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};
use secrecy::SecretString;

use crate::client::AuditLogClient;
use crate::error::{ClientError, Result};
use crate::models::Metadata;

/// Builder for creating a new [`AuditLogClient`].
///
/// # Example
///
/// ```rust,ignore
/// use auditlog_client::AuditLogClient;
/// use secrecy::SecretString;
///
/// let client = AuditLogClient::builder()
///     .endpoint("https://api.workos.com/events".to_string())
///     .api_key(SecretString::new("sk_test".to_string().into()))
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub struct AuditLogClientBuilder {
    endpoint: Option<String>,
    api_key: Option<SecretString>,
    global_metadata: Metadata,
    timeout: Duration,
}

impl Default for AuditLogClientBuilder {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            global_metadata: Metadata::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AuditLogClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the events endpoint URL.
    ///
    /// Defaults to `https://api.workos.com/events`.
    pub fn endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Set the metadata applied to every event.
    ///
    /// Event metadata wins when both set the same key.
    pub fn global_metadata(mut self, metadata: Metadata) -> Self {
        self.global_metadata = metadata;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.endpoint = Some(config.connection.endpoint.clone());
        self.api_key = Some(config.auth.api_key.clone());
        self.timeout = config.connection.timeout;
        self.global_metadata = Metadata::from(config.global_metadata.clone());
        self
    }

    fn normalize_endpoint(raw: &str) -> Result<String> {
        let parsed = url::Url::parse(raw.trim())
            .map_err(|e| ClientError::InvalidUrl(format!("{raw}: {e}")))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "{raw}: scheme must be http or https"
            )));
        }

        Ok(parsed.as_str().trim_end_matches('/').to_string())
    }

    /// Build the [`AuditLogClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the endpoint is not an absolute http(s) URL.
    /// Returns [`ClientError::MissingApiKey`] if no API key was provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<AuditLogClient> {
        let endpoint =
            Self::normalize_endpoint(self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))?;

        let api_key = self.api_key.ok_or(ClientError::MissingApiKey)?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        Ok(AuditLogClient {
            http,
            endpoint,
            api_key,
            global_metadata: self.global_metadata,
        })
    }
}
