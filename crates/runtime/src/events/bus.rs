//! Topic-based event bus implementation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::BattleEvent;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Battle started / ended
    Lifecycle,
    /// Mover selection
    Turn,
    /// Commands and their results
    Action,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Lifecycle, Topic::Turn, Topic::Action];
}

/// Topic-based event bus
///
/// Every event goes to its topic channel and to a combined channel that
/// preserves the global order. Publishing never blocks; events are dropped
/// when nobody listens.
#[derive(Clone)]
pub struct EventBus {
    lifecycle: broadcast::Sender<BattleEvent>,
    turn: broadcast::Sender<BattleEvent>,
    action: broadcast::Sender<BattleEvent>,
    all: broadcast::Sender<BattleEvent>,
}

impl EventBus {
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        // broadcast::channel panics on zero capacity
        let capacity = capacity.max(1);
        Self {
            lifecycle: broadcast::channel(capacity).0,
            turn: broadcast::channel(capacity).0,
            action: broadcast::channel(capacity).0,
            all: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<BattleEvent> {
        match topic {
            Topic::Lifecycle => &self.lifecycle,
            Topic::Turn => &self.turn,
            Topic::Action => &self.action,
        }
    }

    /// Publish an event to its topic and to the combined stream
    pub fn publish(&self, event: BattleEvent) {
        let topic = event.topic();
        if self.sender(topic).send(event.clone()).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
        let _ = self.all.send(event);
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<BattleEvent> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<BattleEvent>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }

    /// Subscribe to every event in publication order
    pub fn subscribe_all(&self) -> broadcast::Receiver<BattleEvent> {
        self.all.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.all.receiver_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{CombatantId, Side};

    fn passed(turn: u32) -> BattleEvent {
        BattleEvent::Passed {
            turn,
            actor: CombatantId::new(Side::Team2, 0),
        }
    }

    #[test]
    fn topic_subscribers_only_see_their_topic() {
        let bus = EventBus::new();
        let mut turns = bus.subscribe(Topic::Turn);
        let mut actions = bus.subscribe(Topic::Action);

        bus.publish(passed(0));

        assert_eq!(actions.try_recv().ok(), Some(passed(0)));
        assert!(turns.try_recv().is_err());
    }

    #[test]
    fn combined_stream_keeps_order() {
        let bus = EventBus::with_capacity(8);
        let mut all = bus.subscribe_all();

        for turn in 0..3 {
            bus.publish(passed(turn));
        }

        for turn in 0..3 {
            assert_eq!(all.try_recv().ok(), Some(passed(turn)));
        }
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::with_capacity(0);
        bus.publish(passed(1));
        assert_eq!(bus.subscribe_multiple(&Topic::ALL).len(), 3);
    }
}
