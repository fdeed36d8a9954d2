//! Main audit log client.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `events`: publish and list methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Event defaulting and validation (delegated to [`crate::prepare_event`])
//!
//! # Invariants
//! - Endpoint, API key and global metadata are fixed once the client is built.

pub mod builder;
mod events;

use secrecy::SecretString;

use crate::models::Metadata;

/// Audit log REST API client.
///
/// Build one at startup and share it by reference; every publish call reads
/// the same endpoint, API key and global metadata.
///
/// ```rust,ignore
/// use auditlog_client::{ActionType, AuditLogClient, Event, Metadata};
/// use secrecy::SecretString;
///
/// let client = AuditLogClient::builder()
///     .api_key(SecretString::new("sk_test".to_string().into()))
///     .global_metadata(Metadata::new().with("service", "billing"))
///     .build()?;
///
/// client
///     .publish(Event::new("document.viewed", ActionType::Read))
///     .await?;
/// ```
#[derive(Debug)]
pub struct AuditLogClient {
    pub(crate) http: reqwest::Client,
    pub(crate) endpoint: String,
    pub(crate) api_key: SecretString,
    pub(crate) global_metadata: Metadata,
}

impl AuditLogClient {
    /// Create a new client builder.
    pub fn builder() -> builder::AuditLogClientBuilder {
        builder::AuditLogClientBuilder::new()
    }

    /// Get the events endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get the metadata applied to every published event.
    pub fn global_metadata(&self) -> &Metadata {
        &self.global_metadata
    }
}
