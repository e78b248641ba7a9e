//! Shutdown coordination.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast;

/// One-shot cancellation handle.
///
/// Clones share the same state. Provides a broadcast channel that long-running
/// tasks can subscribe to, plus a flag so late subscribers can still tell the
/// signal already fired.
#[derive(Clone)]
pub struct Shutdown {
    inner: Arc<Inner>,
}

struct Inner {
    /// Broadcast channel sender.
    tx: broadcast::Sender<()>,
    triggered: AtomicBool,
}

impl Shutdown {
    /// Create a new, unsignaled handle.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self {
            inner: Arc::new(Inner {
                tx,
                triggered: AtomicBool::new(false),
            }),
        }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.inner.tx.subscribe()
    }

    /// Fire the signal. Returns `false` if it had already fired.
    pub fn trigger(&self) -> bool {
        if self.inner.triggered.swap(true, Ordering::SeqCst) {
            return false;
        }
        let _ = self.inner.tx.send(());
        true
    }

    /// Whether the signal has fired.
    pub fn is_triggered(&self) -> bool {
        self.inner.triggered.load(Ordering::SeqCst)
    }

    /// Resolve once the signal has fired (immediately if it already has).
    pub async fn cancelled(&self) {
        let mut rx = self.subscribe();
        if self.is_triggered() {
            return;
        }
        // Closed cannot happen while `self` holds the sender; Lagged means
        // the single message was sent, which is what we are waiting for.
        let _ = rx.recv().await;
    }

    /// Get the number of active subscribers (tasks still listening).
    pub fn receiver_count(&self) -> usize {
        self.inner.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Shutdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shutdown")
            .field("triggered", &self.is_triggered())
            .field("receivers", &self.receiver_count())
            .finish()
    }
}
