//! Ctrl+C cancellation for in-flight audit log calls.
//!
//! Responsibilities:
//! - Provide a cloneable cancellation token that a signal handler can trip.
//! - Race a client call against the token and surface a `Cancelled` error.
//! - Centralize the cancellation message and SIGINT exit code (130).
//!
//! Does NOT handle:
//! - Installing signal handlers (see `main`).
//! - Cancelling anything inside the client; the losing future is simply dropped.
//!
//! Invariants:
//! - Once cancelled, a token stays cancelled.

use std::fmt;
use std::future::Future;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::Notify;

/// Cancellation token shared between the signal handler and commands.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the token. Calling it again has no effect.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Wait until the token is cancelled.
    pub async fn cancelled(&self) {
        // Register before checking the flag so a concurrent cancel is not missed.
        let notified = self.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }

    /// Run `call` to completion unless the token fires first.
    ///
    /// # Errors
    /// Returns [`Cancelled`] when the token wins, otherwise the call's own error.
    pub async fn run<T, E, F>(&self, call: F) -> anyhow::Result<T>
    where
        F: Future<Output = Result<T, E>>,
        E: Into<anyhow::Error>,
    {
        tokio::select! {
            result = call => result.map_err(Into::into),
            _ = self.cancelled() => Err(Cancelled.into()),
        }
    }
}

/// Marker error for a user-initiated cancellation.
#[derive(Debug, Clone, Copy)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cancelled")
    }
}

impl std::error::Error for Cancelled {}

pub fn is_cancelled_error(err: &anyhow::Error) -> bool {
    err.is::<Cancelled>()
}

/// Print the cancellation message to stderr.
pub fn print_cancelled_message() {
    eprintln!("^C\nOperation cancelled by user");
}
