//! # Event Bus
//!
//! Synchronous, in-process publish/subscribe.
//!
//! - [`EventBus::publish`] runs every listener registered for the message's
//!   topic, in registration order, before it returns. Nothing is queued.
//! - The listener list is snapshotted at the start of `publish`, so listeners
//!   may publish or subscribe themselves.
//! - A panicking listener is caught and logged; the remaining listeners still
//!   run and the publisher never sees the failure.
//! - [`EventBus::subscribe`] returns a [`Subscription`]. Dropping it (or
//!   calling [`Subscription::unsubscribe`]) removes the listener.
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use tracker_client::app::bus::EventBus;
//! use tracker_client::app::events::{DeckMessage, Message, Topic};
//!
//! let bus = EventBus::new();
//! let seen = Arc::new(AtomicUsize::new(0));
//! let counter = seen.clone();
//! let subscription = bus.subscribe(Topic::DecksLoadRequested, move |_| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! bus.publish(DeckMessage::LoadRequested.into());
//! drop(subscription);
//! bus.publish(DeckMessage::LoadRequested.into());
//!
//! assert_eq!(seen.load(Ordering::SeqCst), 1);
//! ```

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use tracing::{debug, error};

use super::events::{Message, Topic};
use crate::debug::event_tracker::{EventInfo, EventTracker};

pub type Listener = Arc<dyn Fn(&Message) + Send + Sync>;

struct Registration {
    id: u64,
    listener: Listener,
}

struct BusInner {
    listeners: RwLock<HashMap<Topic, Vec<Registration>>>,
    next_id: AtomicU64,
    tracker: Mutex<EventTracker>,
}

impl BusInner {
    fn remove(&self, topic: Topic, id: u64) {
        let mut listeners = self.listeners.write();
        if let Some(registrations) = listeners.get_mut(&topic) {
            registrations.retain(|r| r.id != id);
            if registrations.is_empty() {
                listeners.remove(&topic);
            }
        }
    }
}

/// Cloneable handle to one bus
#[derive(Clone)]
pub struct EventBus {
    inner: Arc<BusInner>,
}

/// Non-owning handle, for listeners that need to publish on their own bus.
#[derive(Clone)]
pub struct WeakEventBus {
    inner: Weak<BusInner>,
}

impl WeakEventBus {
    pub fn upgrade(&self) -> Option<EventBus> {
        self.inner.upgrade().map(|inner| EventBus { inner })
    }

    /// Publish if the bus is still alive. Returns the number of listeners run.
    pub fn publish(&self, message: Message) -> usize {
        self.upgrade().map_or(0, |bus| bus.publish(message))
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_tracker(EventTracker::default())
    }

    pub fn with_tracker(tracker: EventTracker) -> Self {
        Self {
            inner: Arc::new(BusInner {
                listeners: RwLock::new(HashMap::new()),
                next_id: AtomicU64::new(0),
                tracker: Mutex::new(tracker),
            }),
        }
    }

    pub fn downgrade(&self) -> WeakEventBus {
        WeakEventBus {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Register `listener` for `topic`.
    pub fn subscribe<F>(&self, topic: Topic, listener: F) -> Subscription
    where
        F: Fn(&Message) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .listeners
            .write()
            .entry(topic)
            .or_default()
            .push(Registration {
                id,
                listener: Arc::new(listener),
            });

        Subscription {
            bus: Arc::downgrade(&self.inner),
            topic,
            id,
        }
    }

    /// Deliver `message` to the listeners of its topic.
    ///
    /// Returns the number of listeners that ran, including failed ones.
    pub fn publish(&self, message: Message) -> usize {
        let topic = message.topic();
        let snapshot: Vec<Listener> = self
            .inner
            .listeners
            .read()
            .get(&topic)
            .map(|regs| regs.iter().map(|r| r.listener.clone()).collect())
            .unwrap_or_default();

        debug!(topic = %topic, listeners = snapshot.len(), "Publish");

        for listener in &snapshot {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| listener(&message)));
            if let Err(payload) = outcome {
                let reason = panic_message(payload.as_ref());
                error!(topic = %topic, reason = %reason, "Listener failed");
                self.inner.tracker.lock().record_failure(topic, reason);
            }
        }

        self.inner
            .tracker
            .lock()
            .record_publish(topic, snapshot.len());
        snapshot.len()
    }

    pub fn listener_count(&self, topic: Topic) -> usize {
        self.inner
            .listeners
            .read()
            .get(&topic)
            .map_or(0, Vec::len)
    }

    /// Topics published so far, oldest first, within the tracker's window.
    pub fn published_topics(&self) -> Vec<Topic> {
        self.inner.tracker.lock().published_topics()
    }

    pub fn was_published(&self, topic: Topic) -> bool {
        self.inner.tracker.lock().was_published(topic)
    }

    pub fn recent_events(&self, count: usize) -> Vec<EventInfo> {
        self.inner.tracker.lock().recent(count)
    }

    pub fn failure_count(&self) -> u64 {
        self.inner.tracker.lock().failure_count()
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Registration handle returned by [`EventBus::subscribe`]
#[must_use = "dropping a Subscription unsubscribes the listener"]
pub struct Subscription {
    bus: Weak<BusInner>,
    topic: Topic,
    id: u64,
}

impl Subscription {
    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.bus.upgrade() {
            inner.remove(self.topic, self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("topic", &self.topic)
            .field("id", &self.id)
            .finish()
    }
}

/// Subscriptions owned by one component, released together.
#[derive(Debug, Default)]
pub struct Subscriptions {
    entries: Vec<Subscription>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, subscription: Subscription) {
        self.entries.push(subscription);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unsubscribe everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
