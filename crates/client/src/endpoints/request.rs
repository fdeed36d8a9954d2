//! Single-shot request sending with error response mapping.
//!
//! Requests are sent exactly once. Non-success responses become
//! [`ClientError::ApiError`] carrying the status, URL, service message and
//! request id.

use std::time::Instant;

use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{ClientError, Result};

/// Response header carrying the service's request id.
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// JSON error body returned by the service.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Send a request and map any non-2xx response to [`ClientError::ApiError`].
///
/// # Arguments
///
/// * `builder` - The request to send
/// * `endpoint` - Endpoint label for logging
/// * `method` - HTTP method label for logging
///
/// # Errors
///
/// - [`ClientError::HttpError`] if the request could not be sent.
/// - [`ClientError::ApiError`] if the service answered with a non-success status.
pub async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
) -> Result<Response> {
    let started = Instant::now();
    let response = builder.send().await?;
    let status = response.status();

    debug!(
        method,
        endpoint,
        status = status.as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Audit log request completed"
    );

    if status.is_success() {
        return Ok(response);
    }

    let status = status.as_u16();
    let url = response.url().to_string();
    let request_id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    // Prefer the service's message over the raw body.
    let parsed = serde_json::from_str::<ApiErrorBody>(&body)
        .ok()
        .and_then(|b| b.message);
    let message = parsed.unwrap_or(body);

    warn!(
        method,
        endpoint,
        status,
        request_id = request_id.as_deref().unwrap_or("-"),
        "Audit log request failed"
    );

    Err(ClientError::ApiError {
        status,
        url,
        message,
        request_id,
    })
}
