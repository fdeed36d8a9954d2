//! REST API endpoint implementations.
//!
//! Free functions over a `reqwest::Client`; [`crate::AuditLogClient`] wraps
//! them with its configured endpoint, API key and global metadata.

pub mod events;
mod request;

pub use events::{IDEMPOTENCY_KEY_HEADER, list_events, publish_event};
pub use request::{REQUEST_ID_HEADER, send_request};
