use tokio::sync::broadcast;

use super::{EventBus, ForumEvent};

const CHANNEL_CAPACITY: usize = 256;

/// Fan-out on a `tokio::sync::broadcast` channel. Every WebSocket session
/// holds a receiver; lagging receivers drop the oldest events rather than
/// backpressuring the HTTP path.
pub struct BroadcastEventBus {
    tx: broadcast::Sender<ForumEvent>,
}

impl BroadcastEventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ForumEvent> {
        self.tx.subscribe()
    }
}

impl Default for BroadcastEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus for BroadcastEventBus {
    fn publish(&self, event: ForumEvent) {
        // send() errors only when no subscriber exists, which is fine:
        // nobody is connected, nothing to deliver.
        if let Err(err) = self.tx.send(event) {
            tracing::trace!("no realtime subscribers: {}", err);
        }
    }
}
