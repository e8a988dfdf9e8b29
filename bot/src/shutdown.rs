//! Cooperative shutdown signal.
//!
//! The simulator loop races every sleep against this signal, so tests can
//! stop the otherwise endless loop deterministically instead of waiting out
//! random delays. `main.rs` maps Ctrl-C onto it.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::sync::Notify;

/// Shutdown signal shared between the entry point and the simulator loop.
#[derive(Clone, Debug, Default)]
pub struct ShutdownSignal {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    triggered: AtomicBool,
    notify: Notify,
}

impl ShutdownSignal {
    /// Create a signal in the not-triggered state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once shutdown has been requested.
    pub fn is_triggered(&self) -> bool {
        self.inner.triggered.load(Ordering::Relaxed)
    }

    /// Request shutdown and wake all waiters.
    pub fn trigger(&self) {
        self.inner.triggered.store(true, Ordering::SeqCst);
        self.inner.notify.notify_waiters();
    }

    /// Wait until shutdown is requested.
    pub async fn wait(&self) {
        if self.is_triggered() {
            return;
        }
        self.inner.notify.notified().await;
    }
}
