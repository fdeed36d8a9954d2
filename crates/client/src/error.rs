//! Error types for the audit log client.

use thiserror::Error;

use crate::models::{MAX_METADATA_KEY_LEN, MAX_METADATA_KEYS};

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while preparing, publishing or listing events.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Merged metadata has more keys than the service accepts.
    #[error("too many metadata keys: {count} (maximum {})", MAX_METADATA_KEYS)]
    TooManyMetadataKeys { count: usize },

    /// A metadata key is longer than the service accepts.
    #[error("metadata key {key:?} exceeds {} characters: {length}", MAX_METADATA_KEY_LEN)]
    MetadataKeyTooLong { key: String, length: usize },

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from the audit log service.
    #[error("API error ({status}) at {url}: {message}{}", .request_id.as_ref().map(|id| format!(" [Request ID: {id}]")).unwrap_or_default())]
    ApiError {
        status: u16,
        url: String,
        message: String,
        request_id: Option<String>,
    },

    /// Response body could not be read or decoded.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Missing or malformed endpoint URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// No API key was configured.
    #[error("API key is required")]
    MissingApiKey,
}

impl ClientError {
    /// Check if this error was raised by local event validation.
    ///
    /// Validation errors are raised before any request is sent.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::TooManyMetadataKeys { .. } | Self::MetadataKeyTooLong { .. }
        )
    }

    /// Check if this error indicates a rejected API key.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::ApiError { status: 401 | 403, .. })
    }
}
