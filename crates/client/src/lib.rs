//! Audit log REST API client.
//!
//! This crate shapes audit log events on the client side (idempotency key and
//! timestamp defaulting, metadata merging and validation) and sends them to
//! the audit log events endpoint. It also lists stored events with clamped
//! page sizes.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod prepare;

pub use client::AuditLogClient;
pub use client::builder::AuditLogClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    ActionType, Event, EventRecord, ListEventsParams, ListEventsResponse, ListMetadata,
    MAX_METADATA_KEY_LEN, MAX_METADATA_KEYS, Metadata, PreparedEvent, effective_limit,
};
pub use prepare::prepare_event;
