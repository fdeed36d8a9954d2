//! List command implementation.

use anyhow::{Context, Result};
use auditlog_client::{AuditLogClient, ListEventsParams};
use tracing::debug;

use crate::args::ListArgs;
use crate::cancellation::CancellationToken;

pub async fn run(client: &AuditLogClient, args: ListArgs, cancel: &CancellationToken) -> Result<()> {
    let params = ListEventsParams {
        limit: args.limit,
        before: args.before,
        after: args.after,
        group: args.group,
        action: args.action,
        actor_id: args.actor_id,
        target_id: args.target_id,
        ..ListEventsParams::default()
    };

    if i64::from(params.effective_limit()) != params.limit {
        debug!(
            requested = params.limit,
            effective = params.effective_limit(),
            "Adjusted list page size"
        );
    }

    let page = cancel
        .run(client.list_events(&params))
        .await
        .context("Failed to list events")?;

    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}
