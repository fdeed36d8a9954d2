//! Data models for audit log events.
//!
//! # Submodules
//! - `event`: the caller-facing [`Event`] and the wire-ready [`PreparedEvent`]
//! - `metadata`: the [`Metadata`] map with merge and limit checks
//! - `list`: list request parameters, page size clamping and list responses

mod event;
mod list;
mod metadata;

pub use event::{ActionType, Event, PreparedEvent};
pub use list::{EventRecord, ListEventsParams, ListEventsResponse, ListMetadata, effective_limit};
pub use metadata::{MAX_METADATA_KEY_LEN, MAX_METADATA_KEYS, Metadata};
