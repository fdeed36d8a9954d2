//! Event metadata.
//!
//! # Invariants
//! - Values are arbitrary JSON values.
//! - A map sent to the service has at most [`MAX_METADATA_KEYS`] keys and
//!   every key is at most [`MAX_METADATA_KEY_LEN`] characters long.
//! - Key length counts Unicode scalar values, not bytes.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, Result};

/// Maximum number of metadata keys accepted per event.
pub const MAX_METADATA_KEYS: usize = 50;

/// Maximum length of a metadata key, in characters.
pub const MAX_METADATA_KEY_LEN: usize = 40;

/// Key/value pairs attached to an audit log event.
///
/// Keys are kept sorted so serialization and validation are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<String, Value>);

impl Metadata {
    /// Create an empty metadata map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous value for the key if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Fill in keys from `defaults` that this map does not already have.
    ///
    /// Existing keys are never overwritten.
    pub fn merge(&mut self, defaults: &Metadata) {
        for (key, value) in &defaults.0 {
            if !self.0.contains_key(key) {
                self.0.insert(key.clone(), value.clone());
            }
        }
    }

    /// Check the map against the service limits.
    ///
    /// # Errors
    ///
    /// - [`ClientError::TooManyMetadataKeys`] if there are more than 50 keys.
    /// - [`ClientError::MetadataKeyTooLong`] for the first key (in sorted
    ///   order) longer than 40 characters.
    pub fn validate(&self) -> Result<()> {
        if self.0.len() > MAX_METADATA_KEYS {
            return Err(ClientError::TooManyMetadataKeys {
                count: self.0.len(),
            });
        }

        for key in self.0.keys() {
            let length = key.chars().count();
            if length > MAX_METADATA_KEY_LEN {
                return Err(ClientError::MetadataKeyTooLong {
                    key: key.clone(),
                    length,
                });
            }
        }

        Ok(())
    }
}

impl From<BTreeMap<String, Value>> for Metadata {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Metadata> for BTreeMap<String, Value> {
    fn from(metadata: Metadata) -> Self {
        metadata.0
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Metadata {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
