//! Fan-out of encoded game frames to every subscriber.

use log::trace;
use tokio::sync::broadcast;

use crate::config::DEFAULT_HUB_CAPACITY;

/// Broadcast point for change notifications.
///
/// Subscribers that fall more than `capacity` frames behind lose the
/// oldest ones; the sender is never blocked.
#[derive(Clone)]
pub struct Hub {
    tx: broadcast::Sender<Vec<u8>>,
}

impl Hub {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// A receiver for every frame enqueued from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<Vec<u8>> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Send `frame` to all current subscribers. Returns how many there were.
    pub fn enqueue(&self, frame: Vec<u8>) -> usize {
        let delivered = self.tx.send(frame).unwrap_or(0);
        trace!("hub frame delivered to {} subscriber(s)", delivered);
        delivered
    }
}

impl Default for Hub {
    fn default() -> Self {
        Self::new(DEFAULT_HUB_CAPACITY)
    }
}
