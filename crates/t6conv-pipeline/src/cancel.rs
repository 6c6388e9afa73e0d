//! One-shot cancellation signal.

use std::sync::Arc;
use tokio::sync::watch;

/// A cancellation signal shared by every stage of a conversion.
///
/// Clones observe the same signal. It fires at most once and never resets.
#[derive(Debug, Clone)]
pub struct CancelSignal {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl CancelSignal {
    /// Creates a signal that has not fired.
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self {
            tx: Arc::new(tx),
            rx,
        }
    }

    /// Fires the signal. Returns true only for the call that fired it.
    pub fn cancel(&self) -> bool {
        self.tx.send_if_modified(|cancelled| {
            if *cancelled {
                false
            } else {
                *cancelled = true;
                true
            }
        })
    }

    /// Returns true once the signal has fired.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Waits until the signal fires.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        // The sender lives as long as `self`, so this only returns once fired.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

impl Default for CancelSignal {
    fn default() -> Self {
        Self::new()
    }
}
