//! Authentication types for the audit log configuration.
//!
//! Responsibilities:
//! - Hold the API key sent as a bearer token on every request.
//! - Handle serialization of secret values.
//!
//! Does NOT handle:
//! - Building the `Authorization` header (see client crate).
//!
//! Invariants:
//! - Secret values use `secrecy::SecretString` to prevent accidental logging.
//! - Serialization includes secrets; secrecy is for runtime safety.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// API key for the audit log service.
    #[serde(with = "secret_string")]
    pub api_key: SecretString,
}
