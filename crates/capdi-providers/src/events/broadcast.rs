//! Tokio broadcast event dispatcher
//!
//! In-process event fan-out over a tokio broadcast channel. Dispatch is
//! synchronous; subscribers receive on their own schedule.
//!
//! ## Capacity
//!
//! When the channel is full, the oldest events are dropped. Size the
//! capacity to expected event volume and subscriber processing speed.

use std::sync::Arc;

use capdi_domain::error::Result;
use capdi_domain::ports::events::{AppEvent, EventDispatcher};
use tokio::sync::broadcast;
use tracing::debug;

use crate::constants::EVENTS_DEFAULT_CAPACITY;

/// Event dispatcher backed by a tokio broadcast channel
#[derive(Clone)]
pub struct BroadcastEventDispatcher {
    sender: Arc<broadcast::Sender<AppEvent>>,
    capacity: usize,
}

impl BroadcastEventDispatcher {
    /// Create a dispatcher with the default capacity (1024)
    pub fn new() -> Self {
        Self::with_capacity(EVENTS_DEFAULT_CAPACITY)
    }

    /// Create with custom channel capacity
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
            capacity,
        }
    }

    /// Subscribe to events dispatched after this call
    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    /// Current number of subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastEventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BroadcastEventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BroadcastEventDispatcher")
            .field("capacity", &self.capacity)
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}

impl EventDispatcher for BroadcastEventDispatcher {
    fn dispatch(&self, event: AppEvent) -> Result<()> {
        match self.sender.send(event) {
            Ok(count) => debug!("dispatched event to {count} subscribers"),
            // Send only fails when no receiver exists; not an error for
            // fire-and-forget dispatch.
            Err(_) => debug!("dispatched event with no subscribers"),
        }
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "tokio-broadcast"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_reaches_subscriber() {
        let dispatcher = BroadcastEventDispatcher::new();
        let mut receiver = dispatcher.subscribe();

        let event = AppEvent::new("user.created").with_payload(serde_json::json!({ "id": 7 }));
        dispatcher.dispatch(event.clone()).expect("dispatch");

        let received = receiver.try_recv().expect("event should be delivered");
        assert_eq!(received, event);
    }

    #[test]
    fn test_dispatch_without_subscribers_is_ok() {
        let dispatcher = BroadcastEventDispatcher::new();
        assert!(dispatcher.dispatch(AppEvent::new("ignored")).is_ok());
    }

    #[test]
    fn test_subscriber_count() {
        let dispatcher = BroadcastEventDispatcher::with_capacity(8);
        assert_eq!(dispatcher.subscriber_count(), 0);

        let _receiver = dispatcher.subscribe();
        assert_eq!(dispatcher.subscriber_count(), 1);
    }
}
