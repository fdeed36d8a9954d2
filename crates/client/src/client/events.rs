//! Event API methods for [`AuditLogClient`].
//!
//! # What this module handles:
//! - Preparing and publishing a single event
//! - Listing stored events
//!
//! # What this module does NOT handle:
//! - Low-level HTTP calls (see [`crate::endpoints::events`])
//! - Cancellation: callers drop the returned future (for example from a
//!   `tokio::select!` branch) to abandon a call

use tracing::debug;

use crate::client::AuditLogClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Event, ListEventsParams, ListEventsResponse, PreparedEvent};
use crate::prepare::prepare_event;

impl AuditLogClient {
    /// Prepare `event` with the client's global metadata and publish it.
    ///
    /// Returns the event as it was sent, including the idempotency key that
    /// was used.
    ///
    /// # Errors
    /// - Metadata validation errors, before anything is sent.
    /// - `ClientError::HttpError` or `ClientError::ApiError` from the request.
    pub async fn publish(&self, event: Event) -> Result<PreparedEvent> {
        let prepared = prepare_event(event, &self.global_metadata)?;

        debug!(
            action = prepared.action(),
            idempotency_key = prepared.idempotency_key(),
            "Publishing audit log event"
        );

        endpoints::publish_event(&self.http, &self.endpoint, &self.api_key, &prepared).await?;
        Ok(prepared)
    }

    /// List stored events, one page at a time.
    ///
    /// The requested limit is clamped to `1..=1000` (non-positive means 10).
    pub async fn list_events(&self, params: &ListEventsParams) -> Result<ListEventsResponse> {
        endpoints::list_events(&self.http, &self.endpoint, &self.api_key, params).await
    }
}
