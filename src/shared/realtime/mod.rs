mod broadcaster;
mod ws;

pub use broadcaster::BroadcastEventBus;
pub use ws::ws_handler;

use uuid::Uuid;

/// A single realtime event fanned out to connected clients.
///
/// Entity events (posts, comments, votes) are global: every client gets
/// them and uses them as cache-reconciliation hints. Personal events
/// (notifications) carry a `room` and only reach sessions authenticated
/// as that user.
#[derive(Debug, Clone)]
pub struct ForumEvent {
    pub name: &'static str,
    pub payload: serde_json::Value,
    pub room: Option<Uuid>,
}

impl ForumEvent {
    pub fn global(name: &'static str, payload: serde_json::Value) -> Self {
        Self {
            name,
            payload,
            room: None,
        }
    }

    pub fn for_user(recipient: Uuid, name: &'static str, payload: serde_json::Value) -> Self {
        Self {
            name,
            payload,
            room: Some(recipient),
        }
    }
}

/// Process-wide publish point. Publishing never blocks and delivery is
/// at-most-once: a slow or disconnected subscriber simply misses events.
pub trait EventBus: Send + Sync {
    fn publish(&self, event: ForumEvent);
}
