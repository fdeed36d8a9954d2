//! Shared test utilities for auditlog CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//!
//! Invariants / Assumptions:
//! - `WORKOS_API_KEY` is set to "sk_test_cli" unless overridden.
//! - No endpoint, timeout or global metadata leaks in from the host.

use assert_cmd::Command;

/// API key every hermetic command starts with.
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "sk_test_cli";

/// Returns a hermetic `auditlog` command for integration testing.
pub fn auditlog_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("auditlog");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("WORKOS_API_KEY", TEST_API_KEY);

    cmd.env_remove("WORKOS_AUDITLOG_ENDPOINT")
        .env_remove("WORKOS_AUDITLOG_TIMEOUT")
        .env_remove("WORKOS_AUDITLOG_GLOBAL_METADATA")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic command pointed at `<base>/events`.
#[allow(dead_code)]
pub fn auditlog_cmd_for(base_uri: &str) -> Command {
    let mut cmd = auditlog_cmd();
    cmd.env("WORKOS_AUDITLOG_ENDPOINT", format!("{base_uri}/events"));
    cmd
}
