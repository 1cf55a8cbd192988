//! Change notifier - fans cell-change batches out to subscribers.
//!
//! Backed by a `tokio::sync::broadcast` channel:
//!
//! - Publishing never waits on subscribers
//! - Subscribers only see batches sent after they subscribed
//! - A subscriber that falls more than `capacity` batches behind loses the
//!   oldest ones instead of slowing the loop down

use log::warn;
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};

use crate::types::CellChanges;

#[derive(Debug, Clone)]
pub struct ChangeNotifier {
    tx: broadcast::Sender<CellChanges>,
}

impl ChangeNotifier {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> Subscription {
        Subscription {
            rx: self.tx.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Publish one batch. Empty batches are dropped.
    ///
    /// Returns how many subscribers the batch was queued for.
    pub fn publish(&self, changes: CellChanges) -> usize {
        if changes.is_empty() {
            return 0;
        }
        // Err only means nobody is listening.
        self.tx.send(changes).unwrap_or(0)
    }
}

/// Receiving end of a [`ChangeNotifier`].
#[derive(Debug)]
pub struct Subscription {
    rx: broadcast::Receiver<CellChanges>,
}

impl Subscription {
    /// Wait for the next batch. Returns None once the notifier is gone.
    pub async fn recv(&mut self) -> Option<CellChanges> {
        loop {
            match self.rx.recv().await {
                Ok(changes) => return Some(changes),
                Err(RecvError::Lagged(skipped)) => {
                    warn!("subscriber lagged, {} change batches dropped", skipped);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Non-blocking receive for synchronous consumers.
    pub fn try_recv(&mut self) -> Option<CellChanges> {
        loop {
            match self.rx.try_recv() {
                Ok(changes) => return Some(changes),
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!("subscriber lagged, {} change batches dropped", skipped);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }
}
