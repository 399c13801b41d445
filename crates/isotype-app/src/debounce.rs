//! Cancellable resize debouncer
//!
//! Each call to [`Debouncer::schedule`] aborts the pending timer and starts a
//! new one, so only the last message of a burst is delivered. Superseded
//! messages are dropped, never queued.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::message::Message;

/// Default quiet period before a resize is acted on
pub const DEFAULT_DEBOUNCE_MS: u64 = 180;

/// Delivers a message once no newer message has been scheduled for `quiet`
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Schedule `message` on `tx` after the quiet period, superseding any pending one
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, message: Message, tx: mpsc::Sender<Message>) {
        if self.cancel() {
            trace!("Superseded pending debounced message");
        }

        let quiet = self.quiet;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            if tx.send(message).await.is_err() {
                debug!("Debounced message dropped: channel closed");
            }
        }));
    }

    /// Abort the pending timer; returns whether one was still running
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn quiet(&self) -> Duration {
        self.quiet
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::from_millis(DEFAULT_DEBOUNCE_MS)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
