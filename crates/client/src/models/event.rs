//! Audit log event models.
//!
//! # What this module handles:
//! - The caller-facing [`Event`] with optional idempotency key and timestamp
//! - The wire-ready [`PreparedEvent`] produced by [`crate::prepare_event`]
//! - The CRUD [`ActionType`] codes
//!
//! # Invariants
//! - A `PreparedEvent` always has a non-empty idempotency key and a timestamp.
//! - The idempotency key is never part of the JSON body; it travels as a header.
//! - `metadata` is omitted from the JSON body when empty.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::models::Metadata;

/// The CRUD action recorded by an audit log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    #[serde(rename = "C")]
    Create,
    #[serde(rename = "R")]
    Read,
    #[serde(rename = "U")]
    Update,
    #[serde(rename = "D")]
    Delete,
}

impl ActionType {
    /// Single-letter wire code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Create => "C",
            Self::Read => "R",
            Self::Update => "U",
            Self::Delete => "D",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ActionType {
    type Err = String;

    /// Accepts the wire codes (`C`, `R`, `U`, `D`) or the action names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "create" => Ok(Self::Create),
            "r" | "read" => Ok(Self::Read),
            "u" | "update" => Ok(Self::Update),
            "d" | "delete" => Ok(Self::Delete),
            other => Err(format!(
                "unknown action type '{other}' (expected one of C, R, U, D)"
            )),
        }
    }
}

/// An audit log event as supplied by the caller.
///
/// `idempotency_key` and `occurred_at` may be left unset; they are filled in
/// when the event is prepared for sending.
///
/// # Example
/// ```
/// use auditlog_client::{ActionType, Event};
///
/// let event = Event::new("document.viewed", ActionType::Read)
///     .with_actor("Jairo Kunde", "user_01DGZ0FAXN978HCET66Q98QMTQ")
///     .with_group("abstract.com")
///     .with_location("55.27.223.26")
///     .with_target("central.class", "doc_01DGZ0FAXP4HA4X0BVFKS0ZH4Y");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub action: String,
    pub action_type: ActionType,
    pub actor_name: String,
    pub actor_id: String,
    pub group: String,

    /// Deduplication key. Once an event is accepted, the service locks the
    /// key for 24 hours. Generated when unset or empty.
    pub idempotency_key: Option<String>,

    /// IP address or other location the action came from.
    pub location: String,

    /// Event-specific metadata. Global metadata fills in missing keys.
    pub metadata: Metadata,

    /// When the action happened. Defaults to the current UTC time.
    pub occurred_at: Option<DateTime<FixedOffset>>,

    pub target_name: String,
    pub target_id: String,
}

impl Event {
    /// Create an event with the given action and all other fields empty.
    pub fn new(action: impl Into<String>, action_type: ActionType) -> Self {
        Self {
            action: action.into(),
            action_type,
            actor_name: String::new(),
            actor_id: String::new(),
            group: String::new(),
            idempotency_key: None,
            location: String::new(),
            metadata: Metadata::new(),
            occurred_at: None,
            target_name: String::new(),
            target_id: String::new(),
        }
    }

    /// Set the actor name and id.
    pub fn with_actor(mut self, name: impl Into<String>, id: impl Into<String>) -> Self {
        self.actor_name = name.into();
        self.actor_id = id.into();
        self
    }

    /// Set the group.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the target name and id.
    pub fn with_target(mut self, name: impl Into<String>, id: impl Into<String>) -> Self {
        self.target_name = name.into();
        self.target_id = id.into();
        self
    }

    /// Set the idempotency key.
    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// Set the occurrence timestamp.
    pub fn with_occurred_at(mut self, occurred_at: impl Into<DateTime<FixedOffset>>) -> Self {
        self.occurred_at = Some(occurred_at.into());
        self
    }

    /// Replace the metadata.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// An event with every default resolved and metadata validated.
///
/// Only produced by [`crate::prepare_event`]; serializes to the JSON body
/// sent to the events endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedEvent {
    pub(crate) action: String,
    pub(crate) action_type: ActionType,
    pub(crate) actor_name: String,
    pub(crate) actor_id: String,
    pub(crate) group: String,
    #[serde(skip)]
    pub(crate) idempotency_key: String,
    pub(crate) location: String,
    #[serde(skip_serializing_if = "Metadata::is_empty")]
    pub(crate) metadata: Metadata,
    pub(crate) occurred_at: DateTime<FixedOffset>,
    pub(crate) target_name: String,
    pub(crate) target_id: String,
}

impl PreparedEvent {
    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn action_type(&self) -> ActionType {
        self.action_type
    }

    pub fn actor_name(&self) -> &str {
        &self.actor_name
    }

    pub fn actor_id(&self) -> &str {
        &self.actor_id
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    /// The idempotency key sent in the `Idempotency-Key` header.
    pub fn idempotency_key(&self) -> &str {
        &self.idempotency_key
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Event metadata merged with global metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn occurred_at(&self) -> DateTime<FixedOffset> {
        self.occurred_at
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }
}
