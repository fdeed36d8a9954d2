//! Command dispatch logic.
//!
//! Responsibilities:
//! - Build the audit log client from the loaded configuration.
//! - Route parsed subcommands to their handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).
//!
//! Invariants:
//! - Every command runs with the process-wide cancellation token.

use anyhow::{Context, Result};
use auditlog_client::AuditLogClient;
use auditlog_config::Config;

use crate::args::Commands;
use crate::cancellation::CancellationToken;
use crate::commands;

/// Dispatch a subcommand to its handler.
pub(crate) async fn run_command(
    command: Commands,
    config: &Config,
    cancel_token: &CancellationToken,
) -> Result<()> {
    let client = AuditLogClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build audit log client")?;

    match command {
        Commands::Publish(args) => commands::publish::run(&client, args, cancel_token).await,
        Commands::List(args) => commands::list::run(&client, args, cancel_token).await,
    }
}
