//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError` variants to those exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see `cancellation`).
//!
//! Invariants:
//! - Metadata validation failures always exit 5 and never reach the network.
//! - Exit code 130 is reserved for SIGINT (128 + SIGINT).

use auditlog_client::ClientError;

/// Structured exit codes for `auditlog`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled failure, configuration errors and API errors without a
    /// more specific category.
    GeneralError = 1,

    /// The service rejected the API key (HTTP 401 or 403).
    AuthenticationFailed = 2,

    /// Network, DNS or timeout failure. Scripts may retry.
    ConnectionError = 3,

    /// Invalid input: metadata limits, bad endpoint, HTTP 400/422.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Interrupted by SIGINT/Ctrl+C.
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with `std::process::exit()`.
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::TooManyMetadataKeys { .. } | ClientError::MetadataKeyTooLong { .. } => {
                ExitCode::ValidationError
            }
            ClientError::InvalidUrl(_) => ExitCode::ValidationError,
            ClientError::ApiError {
                status: 400 | 422, ..
            } => ExitCode::ValidationError,

            ClientError::ApiError {
                status: 401 | 403, ..
            } => ExitCode::AuthenticationFailed,

            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ExitCode::ConnectionError
            }

            ClientError::HttpError(_)
            | ClientError::ApiError { .. }
            | ClientError::InvalidResponse(_)
            | ClientError::MissingApiKey => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for extracting exit codes from `anyhow::Error`.
pub trait ExitCodeExt {
    /// Returns `ExitCode::GeneralError` when no `ClientError` is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
