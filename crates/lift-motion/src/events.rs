//! State-change listener registry.
//!
//! # Why this exists
//!
//! Car state changes fan out to several consumers at once: the building's
//! one-shot call-completion watch, a renderer, instrumentation.  The registry
//! makes the broadcast explicit and — critically — safe under the required
//! usage pattern of listeners that remove themselves from inside their own
//! callback.
//!
//! Self-removal is expressed by the listener's return value
//! ([`Subscription::Cancel`]); cancellations are applied only after the full
//! delivery pass, so removal never shifts entries under the dispatch loop.
//! Listeners registered during a pass (between notifications) are first
//! invoked on the next notification.

use crate::car::CarSnapshot;

/// Handle identifying one registered listener.  Ids are never reused within a
/// registry's lifetime.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct ListenerId(u64);

/// A listener's verdict after each notification.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Subscription {
    /// Stay registered.
    Keep,
    /// Remove this listener; it will not be invoked again.
    Cancel,
}

type Listener = Box<dyn FnMut(&CarSnapshot) -> Subscription>;

/// Registry of car state-change listeners.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Vec<(ListenerId, Listener)>,
    next_id:   u64,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `f` to be called on every car state change.
    ///
    /// Returns a [`ListenerId`] for later [`unsubscribe`][Self::unsubscribe];
    /// one-shot listeners can instead return [`Subscription::Cancel`] from
    /// the callback itself.
    pub fn subscribe(
        &mut self,
        f: impl FnMut(&CarSnapshot) -> Subscription + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(f)));
        id
    }

    /// Remove a listener.  Returns `false` if `id` was already removed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Deliver `snapshot` to every registered listener, in registration
    /// order, then drop the ones that returned [`Subscription::Cancel`].
    pub fn notify(&mut self, snapshot: &CarSnapshot) {
        let mut cancelled: Vec<ListenerId> = Vec::new();
        for (id, listener) in &mut self.listeners {
            if listener(snapshot) == Subscription::Cancel {
                cancelled.push(*id);
            }
        }
        if !cancelled.is_empty() {
            self.listeners.retain(|(id, _)| !cancelled.contains(id));
        }
    }

    /// Number of currently registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
