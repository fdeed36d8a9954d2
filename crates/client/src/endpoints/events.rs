//! Audit log events endpoint.
//!
//! # What this module handles:
//! - Publishing one prepared event (`POST <endpoint>`)
//! - Listing stored events (`GET <endpoint>?limit=...`)
//!
//! # What this module does NOT handle:
//! - Defaulting and validation (see [`crate::prepare_event`])
//! - Retries: every call sends exactly one request
//!
//! # Authentication
//! `Authorization: Bearer <api key>` on every request.
//!
//! # Invariants
//! - The idempotency key is sent only in the `Idempotency-Key` header.
//! - The list `limit` is always the clamped value.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::{ListEventsParams, ListEventsResponse, PreparedEvent};

/// Request header carrying the event's idempotency key.
pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

/// Publish one prepared event.
///
/// # Arguments
/// * `client` - The HTTP client
/// * `endpoint` - The events endpoint URL
/// * `api_key` - The API key
/// * `event` - The prepared event
///
/// # Errors
/// Returns `ClientError` if the request fails or the service rejects the event.
pub async fn publish_event(
    client: &Client,
    endpoint: &str,
    api_key: &SecretString,
    event: &PreparedEvent,
) -> Result<()> {
    let builder = client
        .post(endpoint)
        .header("Authorization", format!("Bearer {}", api_key.expose_secret()))
        .header(IDEMPOTENCY_KEY_HEADER, event.idempotency_key())
        .json(event);

    send_request(builder, endpoint, "POST").await?;
    Ok(())
}

/// List stored events.
///
/// # Arguments
/// * `client` - The HTTP client
/// * `endpoint` - The events endpoint URL
/// * `api_key` - The API key
/// * `params` - Page size, cursors and filters
///
/// # Errors
/// Returns `ClientError` if the request fails or the body cannot be decoded.
pub async fn list_events(
    client: &Client,
    endpoint: &str,
    api_key: &SecretString,
    params: &ListEventsParams,
) -> Result<ListEventsResponse> {
    let builder = client
        .get(endpoint)
        .header("Authorization", format!("Bearer {}", api_key.expose_secret()))
        .query(&params.query_pairs());

    let response = send_request(builder, endpoint, "GET").await?;
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to read response body: {e}")))?;

    serde_json::from_str(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse events list: {e}")))
}
