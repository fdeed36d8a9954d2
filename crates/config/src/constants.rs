//! Centralized constants for the audit log workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default audit log events endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.workos.com/events";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// List Pagination Defaults
// =============================================================================

/// Page size used when a list request asks for zero or fewer events.
pub const DEFAULT_LIST_LIMIT: u32 = 10;

/// Largest page size the events service accepts.
pub const MAX_LIST_LIMIT: u32 = 1000;

// =============================================================================
// Environment Variables
// =============================================================================

/// API key used as the bearer token.
pub const ENV_API_KEY: &str = "WORKOS_API_KEY";

/// Events endpoint override.
pub const ENV_ENDPOINT: &str = "WORKOS_AUDITLOG_ENDPOINT";

/// Request timeout in seconds.
pub const ENV_TIMEOUT: &str = "WORKOS_AUDITLOG_TIMEOUT";

/// JSON object merged into every event as default metadata.
pub const ENV_GLOBAL_METADATA: &str = "WORKOS_AUDITLOG_GLOBAL_METADATA";
