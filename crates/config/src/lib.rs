//! Configuration management for the audit log client.
//!
//! This crate provides types and loaders for the API key, endpoint and
//! process-wide default metadata, read from `.env` files, environment
//! variables and explicit overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig};
