//! Publish command implementation.

use anyhow::{Context, Result};
use auditlog_client::{AuditLogClient, Event, Metadata, PreparedEvent};
use serde_json::Value;
use tracing::info;

use crate::args::PublishArgs;
use crate::cancellation::CancellationToken;

pub async fn run(
    client: &AuditLogClient,
    args: PublishArgs,
    cancel: &CancellationToken,
) -> Result<()> {
    let event = build_event(args);

    let prepared = cancel
        .run(client.publish(event))
        .await
        .context("Failed to publish event")?;

    info!(
        action = prepared.action(),
        idempotency_key = prepared.idempotency_key(),
        "Event published"
    );

    println!("{}", serde_json::to_string_pretty(&event_output(&prepared)?)?);
    Ok(())
}

fn build_event(args: PublishArgs) -> Event {
    let mut event = Event::new(args.action, args.action_type)
        .with_actor(args.actor_name, args.actor_id)
        .with_group(args.group)
        .with_location(args.location)
        .with_target(args.target_name, args.target_id)
        .with_metadata(args.metadata.into_iter().collect::<Metadata>());

    event.idempotency_key = args.idempotency_key;
    event.occurred_at = args.occurred_at;
    event
}

/// The published body plus the idempotency key, which only went out as a header.
fn event_output(prepared: &PreparedEvent) -> Result<Value> {
    let mut output = serde_json::to_value(prepared)?;
    if let Value::Object(fields) = &mut output {
        fields.insert(
            "idempotency_key".to_string(),
            Value::String(prepared.idempotency_key().to_string()),
        );
    }
    Ok(output)
}
