//! List request parameters and list responses for stored audit log events.
//!
//! # Invariants
//! - The page size sent to the service is always in `1..=1000`.
//! - Zero and negative requested limits fall back to the default page size
//!   of 10, not to 1.
//! - Unset filters are not sent.

use auditlog_config::constants::{DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};

use crate::models::{ActionType, Metadata};

/// Clamp a requested page size to what the service accepts.
///
/// | requested | effective |
/// |---|---|
/// | `<= 0` | 10 |
/// | `> 1000` | 1000 |
/// | otherwise | unchanged |
///
/// # Example
/// ```
/// use auditlog_client::effective_limit;
///
/// assert_eq!(effective_limit(0), 10);
/// assert_eq!(effective_limit(-1), 10);
/// assert_eq!(effective_limit(100), 100);
/// assert_eq!(effective_limit(5000), 1000);
/// ```
pub fn effective_limit(requested: i64) -> u32 {
    if requested <= 0 {
        DEFAULT_LIST_LIMIT
    } else if requested > i64::from(MAX_LIST_LIMIT) {
        MAX_LIST_LIMIT
    } else {
        // In 1..=MAX_LIST_LIMIT here, so the cast is lossless.
        requested as u32
    }
}

/// Parameters for listing stored events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListEventsParams {
    /// Requested page size; clamped by [`effective_limit`] before sending.
    pub limit: i64,
    /// Cursor: return events before this event id.
    pub before: Option<String>,
    /// Cursor: return events after this event id.
    pub after: Option<String>,
    pub group: Option<String>,
    pub action: Option<String>,
    pub action_type: Option<ActionType>,
    pub actor_name: Option<String>,
    pub actor_id: Option<String>,
    pub target_name: Option<String>,
    pub target_id: Option<String>,
    pub occurred_at_gt: Option<DateTime<FixedOffset>>,
    pub occurred_at_gte: Option<DateTime<FixedOffset>>,
    pub occurred_at_lt: Option<DateTime<FixedOffset>>,
    pub occurred_at_lte: Option<DateTime<FixedOffset>>,
}

impl ListEventsParams {
    /// Create parameters with the given requested page size and no filters.
    pub fn new(limit: i64) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// The page size that will actually be requested.
    pub fn effective_limit(&self) -> u32 {
        effective_limit(self.limit)
    }

    /// Continue from the `after` cursor of a previous page.
    pub fn with_after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Continue from the `before` cursor of a previous page.
    pub fn with_before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    /// Query string pairs, in a stable order, with the clamped limit first.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("limit", self.effective_limit().to_string())];

        let strings = [
            ("before", &self.before),
            ("after", &self.after),
            ("group", &self.group),
            ("action", &self.action),
            ("actor_name", &self.actor_name),
            ("actor_id", &self.actor_id),
            ("target_name", &self.target_name),
            ("target_id", &self.target_id),
        ];
        for (name, value) in strings {
            if let Some(value) = value {
                pairs.push((name, value.clone()));
            }
        }

        if let Some(action_type) = self.action_type {
            pairs.push(("action_type", action_type.code().to_string()));
        }

        let times = [
            ("occurred_at_gt", &self.occurred_at_gt),
            ("occurred_at_gte", &self.occurred_at_gte),
            ("occurred_at_lt", &self.occurred_at_lt),
            ("occurred_at_lte", &self.occurred_at_lte),
        ];
        for (name, value) in times {
            if let Some(value) = value {
                pairs.push((name, value.to_rfc3339_opts(SecondsFormat::AutoSi, true)));
            }
        }

        pairs
    }
}

/// A stored event returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub action_type: Option<ActionType>,
    #[serde(default)]
    pub actor_name: String,
    #[serde(default)]
    pub actor_id: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub occurred_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub target_name: String,
    #[serde(default)]
    pub target_id: String,
}

/// Pagination cursors for a page of events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListMetadata {
    #[serde(default)]
    pub before: Option<String>,
    #[serde(default)]
    pub after: Option<String>,
}

/// One page of stored events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEventsResponse {
    pub data: Vec<EventRecord>,
    #[serde(rename = "listMetadata", default)]
    pub list_metadata: ListMetadata,
}

impl ListEventsResponse {
    /// True when the service reported a cursor for a following page.
    pub fn has_more(&self) -> bool {
        self.list_metadata.after.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_effective_limit_table() {
        let cases = [(1, 1), (-1, 10), (0, 10), (1001, 1000), (100, 100)];
        for (requested, expected) in cases {
            assert_eq!(
                effective_limit(requested),
                expected,
                "requested limit {requested}"
            );
        }
    }

    #[test]
    fn test_effective_limit_extremes() {
        assert_eq!(effective_limit(i64::MIN), 10);
        assert_eq!(effective_limit(i64::MAX), 1000);
        assert_eq!(effective_limit(1000), 1000);
    }

    #[test]
    fn test_default_params_request_default_page() {
        assert_eq!(ListEventsParams::default().effective_limit(), 10);
    }

    #[test]
    fn test_query_pairs_only_include_set_filters() {
        let params = ListEventsParams {
            limit: 2000,
            group: Some("abstract.com".to_string()),
            action_type: Some(ActionType::Delete),
            ..ListEventsParams::default()
        }
        .with_after("evt_01");

        assert_eq!(
            params.query_pairs(),
            vec![
                ("limit", "1000".to_string()),
                ("after", "evt_01".to_string()),
                ("group", "abstract.com".to_string()),
                ("action_type", "D".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_format_times_as_rfc3339() {
        let params = ListEventsParams {
            occurred_at_gte: Some(DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").unwrap()),
            ..ListEventsParams::new(50)
        };

        let pairs = params.query_pairs();
        assert_eq!(
            pairs[1],
            ("occurred_at_gte", "2024-01-01T00:00:00Z".to_string())
        );
    }

    #[test]
    fn test_list_response_deserializes() {
        let response: ListEventsResponse = serde_json::from_value(json!({
            "data": [{
                "id": "evt_01",
                "action": "document.viewed",
                "action_type": "R",
                "actor_name": "Jairo Kunde",
                "actor_id": "user_01",
                "group": "abstract.com",
                "location": "55.27.223.26",
                "metadata": {"ip": "1.2.3.4"},
                "occurred_at": "2024-05-01T12:00:00.000Z",
                "target_name": "central.class",
                "target_id": "doc_01"
            }],
            "listMetadata": {"before": null, "after": "evt_01"}
        }))
        .unwrap();

        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].action_type, Some(ActionType::Read));
        assert!(response.has_more());
    }

    #[test]
    fn test_list_response_without_cursors() {
        let response: ListEventsResponse =
            serde_json::from_value(json!({"data": []})).unwrap();
        assert!(!response.has_more());
    }
}
