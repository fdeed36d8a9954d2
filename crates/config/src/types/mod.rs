//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define the connection, authentication and top-level `Config` types.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - The API key is always held as `secrecy::SecretString`.

mod auth;
mod connection;

pub use auth::AuthConfig;
pub use connection::{Config, ConnectionConfig};
