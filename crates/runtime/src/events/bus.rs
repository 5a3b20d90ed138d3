//! Topic-based event bus implementation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{Notification, Rejection};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Events emitted by committed actions
    Notifications,
    /// Requests refused by the engine
    Rejections,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Notification(Notification),
    Rejection(Rejection),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Notification(_) => Topic::Notifications,
            Event::Rejection(_) => Topic::Rejections,
        }
    }
}

/// Topic-based event bus.
///
/// Every topic has its own broadcast channel, created up front. Publishing is
/// best-effort: events sent while nobody listens are dropped.
#[derive(Clone)]
pub struct EventBus {
    notifications: broadcast::Sender<Event>,
    rejections: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            notifications: broadcast::channel(capacity).0,
            rejections: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Notifications => &self.notifications,
            Topic::Rejections => &self.rejections,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raid_core::{GameEvent, Identity};

    fn notification() -> Event {
        Event::Notification(Notification {
            nonce: 1,
            event: GameEvent::CharacterCreated {
                owner: Identity::new("0xa"),
            },
        })
    }

    #[tokio::test]
    async fn events_reach_only_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut notifications = bus.subscribe(Topic::Notifications);
        let mut rejections = bus.subscribe(Topic::Rejections);

        bus.publish(notification());

        let received = notifications.recv().await.unwrap();
        assert_eq!(received.topic(), Topic::Notifications);
        assert!(rejections.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        EventBus::new().publish(notification());
    }
}
