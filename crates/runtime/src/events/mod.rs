//! Topic-based event bus for battle events.
//!
//! Events are published to a topic, and consumers subscribe to the topics
//! they need or to the combined stream.

mod bus;
mod types;

pub use bus::{EventBus, Topic};
pub use types::BattleEvent;
