//! Event preparation: defaulting and validation before an event is sent.
//!
//! # Invariants
//! - An unset `occurred_at` becomes the current UTC time; a set one is kept
//!   as-is, offset included.
//! - An unset or empty idempotency key becomes a random UUID v4.
//! - Global metadata only fills keys the event does not set.
//! - Limits are checked on the merged metadata, so a key coming from global
//!   metadata can fail validation too.
//! - On error nothing is returned to send.

use chrono::{DateTime, FixedOffset, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Event, Metadata, PreparedEvent};

/// Resolve defaults on `event`, merge in `global_metadata` and validate.
///
/// # Errors
///
/// Returns [`crate::ClientError::TooManyMetadataKeys`] or
/// [`crate::ClientError::MetadataKeyTooLong`] when the merged metadata breaks
/// the service limits.
///
/// # Example
/// ```
/// use auditlog_client::{ActionType, Event, Metadata, prepare_event};
///
/// let global = Metadata::new().with("service", "billing");
/// let event = Event::new("invoice.created", ActionType::Create)
///     .with_idempotency_key("invoice-42");
///
/// let prepared = prepare_event(event, &global).unwrap();
/// assert_eq!(prepared.idempotency_key(), "invoice-42");
/// assert!(prepared.metadata().contains_key("service"));
/// ```
pub fn prepare_event(event: Event, global_metadata: &Metadata) -> Result<PreparedEvent> {
    let Event {
        action,
        action_type,
        actor_name,
        actor_id,
        group,
        idempotency_key,
        location,
        mut metadata,
        occurred_at,
        target_name,
        target_id,
    } = event;

    let occurred_at = default_occurred_at(occurred_at);
    let idempotency_key = default_idempotency_key(idempotency_key);

    metadata.merge(global_metadata);
    metadata.validate()?;

    Ok(PreparedEvent {
        action,
        action_type,
        actor_name,
        actor_id,
        group,
        idempotency_key,
        location,
        metadata,
        occurred_at,
        target_name,
        target_id,
    })
}

fn default_occurred_at(occurred_at: Option<DateTime<FixedOffset>>) -> DateTime<FixedOffset> {
    occurred_at.unwrap_or_else(|| {
        let now = Utc::now().fixed_offset();
        debug!(occurred_at = %now, "Defaulted event timestamp to now");
        now
    })
}

fn default_idempotency_key(key: Option<String>) -> String {
    match key {
        Some(key) if !key.is_empty() => key,
        _ => {
            let key = Uuid::new_v4().to_string();
            debug!(idempotency_key = %key, "Generated idempotency key");
            key
        }
    }
}
