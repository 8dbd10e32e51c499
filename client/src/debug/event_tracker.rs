//! Event tracking for the event bus
//!
//! Keeps a bounded history of published topics and of listeners that
//! panicked, so the message flow can be inspected after the fact.

use std::collections::VecDeque;
use std::time::Instant;

use crate::app::events::Topic;

/// Entries kept by [`EventTracker::default`].
pub const DEFAULT_HISTORY: usize = 256;

/// One tracked bus event
#[derive(Debug, Clone)]
pub struct EventInfo {
    pub sequence: u64,
    pub topic: Topic,
    pub kind: EventKind,
    pub timestamp: Instant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// Message delivered to this many listeners
    Published { listeners: usize },
    /// A listener panicked while handling the message
    ListenerFailed { message: String },
}

/// Ring buffer of recent bus events
#[derive(Debug)]
pub struct EventTracker {
    events: VecDeque<EventInfo>,
    max_size: usize,
    next_sequence: u64,
    failures: u64,
}

impl Default for EventTracker {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY)
    }
}

impl EventTracker {
    pub fn new(max_size: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_size),
            max_size: max_size.max(1),
            next_sequence: 0,
            failures: 0,
        }
    }

    fn push(&mut self, topic: Topic, kind: EventKind) {
        if self.events.len() >= self.max_size {
            self.events.pop_front();
        }
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.events.push_back(EventInfo {
            sequence,
            topic,
            kind,
            timestamp: Instant::now(),
        });
    }

    pub fn record_publish(&mut self, topic: Topic, listeners: usize) {
        self.push(topic, EventKind::Published { listeners });
    }

    pub fn record_failure(&mut self, topic: Topic, message: String) {
        self.failures += 1;
        self.push(topic, EventKind::ListenerFailed { message });
    }

    /// Most recent events, newest first.
    pub fn recent(&self, count: usize) -> Vec<EventInfo> {
        self.events.iter().rev().take(count).cloned().collect()
    }

    /// Topics published, oldest first, within the retained window.
    pub fn published_topics(&self) -> Vec<Topic> {
        self.events
            .iter()
            .filter(|e| matches!(e.kind, EventKind::Published { .. }))
            .map(|e| e.topic)
            .collect()
    }

    pub fn was_published(&self, topic: Topic) -> bool {
        self.events
            .iter()
            .any(|e| e.topic == topic && matches!(e.kind, EventKind::Published { .. }))
    }

    /// Listener failures since creation, including ones evicted from history.
    pub fn failure_count(&self) -> u64 {
        self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_evicts_oldest() {
        let mut tracker = EventTracker::new(2);
        tracker.record_publish(Topic::DecksLoadRequested, 1);
        tracker.record_publish(Topic::DecksLoaded, 2);
        tracker.record_publish(Topic::StatsLoaded, 0);

        assert_eq!(
            tracker.published_topics(),
            vec![Topic::DecksLoaded, Topic::StatsLoaded]
        );
        assert_eq!(tracker.recent(1)[0].sequence, 2);
    }

    #[test]
    fn test_failures_are_counted() {
        let mut tracker = EventTracker::new(1);
        tracker.record_failure(Topic::MatchCreated, "boom".to_string());
        tracker.record_publish(Topic::MatchCreated, 1);
        assert_eq!(tracker.failure_count(), 1);
        assert!(tracker.was_published(Topic::MatchCreated));
    }
}
