use std::sync::Arc;

use tokio::sync::watch;

/// Server-wide stop flag shared by the signal handler and every open event
/// stream. Once triggered it stays triggered, so a stream opened during
/// shutdown ends immediately instead of waiting for a signal it missed.
#[derive(Clone)]
pub struct ShutdownSignal {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self {
            tx: Arc::new(tx),
            rx,
        }
    }

    /// Ask every stream and the HTTP server to stop
    pub fn trigger(&self) {
        if !self.tx.send_replace(true) {
            log::info!("Shutdown signal received, closing event streams");
        }
    }

    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once `trigger` has been called, immediately if it already was
    pub async fn triggered(&mut self) {
        // Err only if every sender is gone, which cannot happen while `self` holds one.
        let _ = self.rx.wait_for(|stopped| *stopped).await;
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}
