//! Ctrl+C cancellation for in-flight commands.
//!
//! Responsibilities:
//! - Provide a cloneable token flipped by the SIGINT handler.
//! - Race command futures against cancellation via `cancellable!`.
//!
//! Invariants:
//! - A cancelled command drops its request future; nothing else is cleaned up.
//! - Exit code 130 is used for cancelled commands (128 + SIGINT).

use std::fmt;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::Notify;

/// Token shared between the signal handler and running commands.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        let was_cancelled = self.cancelled.swap(true, Ordering::SeqCst);
        if !was_cancelled {
            self.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Resolves once `cancel()` has been called.
    pub async fn cancelled(&self) {
        let notified = self.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}

/// Error returned when a command was interrupted.
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

pub fn print_cancelled_message() {
    eprintln!("^C\nOperation cancelled by user");
}

/// Await `$fut`, bailing out with [`Cancelled`] if `$cancel` fires first.
#[macro_export]
macro_rules! cancellable {
    ($fut:expr, $cancel:expr) => {{
        tokio::select! {
            res = $fut => res.map_err(anyhow::Error::from),
            _ = $cancel.cancelled() => Err(anyhow::Error::new($crate::cancellation::Cancelled)),
        }
    }};
}
