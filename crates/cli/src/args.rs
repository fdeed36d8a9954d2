//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse `KEY=VALUE` metadata pairs and RFC 3339 timestamps.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate metadata limits (the client does that before sending).

use auditlog_client::ActionType;
use chrono::{DateTime, FixedOffset};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "auditlog")]
#[command(about = "Publish and list audit log events from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  auditlog publish --action document.viewed --action-type R --actor-id user_01 --group acme.com\n  auditlog publish --action user.login --action-type C --metadata ip=\"10.0.0.1\" --metadata attempts=3\n  auditlog list --limit 50 --group acme.com\n  auditlog --global-metadata service='\"billing\"' publish --action invoice.created --action-type C\n"
)]
pub struct Cli {
    /// Audit log events endpoint URL
    #[arg(short, long, global = true, env = "WORKOS_AUDITLOG_ENDPOINT")]
    pub endpoint: Option<String>,

    /// API key used as the bearer token
    #[arg(short = 'k', long, global = true, env = "WORKOS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "WORKOS_AUDITLOG_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Metadata added to every event, as KEY=JSON (repeatable)
    #[arg(long = "global-metadata", global = true, value_name = "KEY=JSON", value_parser = parse_metadata_pair)]
    pub global_metadata: Vec<(String, Value)>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Publish a single audit log event
    Publish(PublishArgs),

    /// List stored audit log events
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct PublishArgs {
    /// Action name (e.g., 'document.viewed')
    #[arg(long)]
    pub action: String,

    /// Action type: C, R, U, D (or create, read, update, delete)
    #[arg(long)]
    pub action_type: ActionType,

    #[arg(long, default_value = "")]
    pub actor_name: String,

    #[arg(long, default_value = "")]
    pub actor_id: String,

    #[arg(long, default_value = "")]
    pub group: String,

    /// IP address or other location of the actor
    #[arg(long, default_value = "")]
    pub location: String,

    #[arg(long, default_value = "")]
    pub target_name: String,

    #[arg(long, default_value = "")]
    pub target_id: String,

    /// Deduplication key; a random UUID is used when omitted
    #[arg(long)]
    pub idempotency_key: Option<String>,

    /// When the action happened, RFC 3339 (defaults to now)
    #[arg(long, value_parser = parse_timestamp)]
    pub occurred_at: Option<DateTime<FixedOffset>>,

    /// Event metadata as KEY=VALUE; VALUE is parsed as JSON, else kept as a string (repeatable)
    #[arg(short, long, value_name = "KEY=VALUE", value_parser = parse_metadata_pair)]
    pub metadata: Vec<(String, Value)>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Page size; values <= 0 use 10 and values above 1000 are capped
    #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
    pub limit: i64,

    /// Return events before this event id
    #[arg(long)]
    pub before: Option<String>,

    /// Return events after this event id
    #[arg(long)]
    pub after: Option<String>,

    #[arg(long)]
    pub group: Option<String>,

    #[arg(long)]
    pub action: Option<String>,

    #[arg(long)]
    pub actor_id: Option<String>,

    #[arg(long)]
    pub target_id: Option<String>,
}

/// Parse `KEY=VALUE`, reading VALUE as JSON and falling back to a plain string.
pub fn parse_metadata_pair(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("metadata key must not be empty in '{raw}'"));
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map_err(|e| format!("invalid RFC 3339 timestamp '{raw}': {e}"))
}
