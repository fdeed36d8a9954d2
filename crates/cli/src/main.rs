//! auditlog - command-line client for the audit log events API.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Publish and list events via the shared client library.
//! - Print results as JSON and exit with structured exit codes.
//!
//! Does NOT handle:
//! - Event defaulting, validation or HTTP details (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap env defaults.
//! - CLI flags override environment variables.

mod args;
mod cancellation;
mod commands;
mod dispatch;
mod error;

use std::time::Duration;

use args::Cli;
use auditlog_config::{Config, ConfigLoader};
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable JSON.
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli.command, &config, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Environment first, then CLI overrides.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new().from_env()?;

    if let Some(ref endpoint) = cli.endpoint {
        loader = loader.with_endpoint(endpoint.clone());
    }
    if let Some(ref key) = cli.api_key {
        loader = loader.with_api_key(key.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }
    for (key, value) in &cli.global_metadata {
        loader = loader.with_global_metadata_entry(key.clone(), value.clone());
    }

    Ok(loader.build()?)
}
