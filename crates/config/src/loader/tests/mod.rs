//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests that touch the environment use `serial_test` and `env_lock()`.
//! - Environment mutations go through `temp_env` so they are restored afterwards.

use std::sync::Mutex;

pub mod basic_tests;
pub mod env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
