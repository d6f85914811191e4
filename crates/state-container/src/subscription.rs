//! Subscriber registry
//!
//! Registrations are keyed by a monotonically increasing id, so subscribing the
//! same callback twice yields two independent registrations.

use std::sync::{Arc, Mutex, PoisonError, Weak};

/// Callback invoked after every completed transition
pub(crate) type Subscriber = Arc<dyn Fn() + Send + Sync>;

/// Ordered list of active subscribers
#[derive(Default)]
pub(crate) struct SubscriberList {
    next_id: u64,
    entries: Vec<(u64, Subscriber)>,
}

impl SubscriberList {
    pub(crate) fn add(&mut self, callback: Subscriber) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Copy of the current registrations, in registration order
    pub(crate) fn snapshot(&self) -> Vec<(u64, Subscriber)> {
        self.entries.clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Handle returned by [`Store::subscribe`](crate::Store::subscribe)
///
/// Calling [`Subscription::unsubscribe`] stops further notifications for this
/// registration. It never affects the state. Dropping the handle without calling
/// it leaves the subscriber registered.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    subscribers: Weak<Mutex<SubscriberList>>,
}

impl Subscription {
    pub(crate) fn new(id: u64, subscribers: &Arc<Mutex<SubscriberList>>) -> Self {
        Self {
            id,
            subscribers: Arc::downgrade(subscribers),
        }
    }

    /// Remove this registration from the store
    ///
    /// Returns `false` if the store no longer exists or the registration was
    /// already removed.
    pub fn unsubscribe(self) -> bool {
        let Some(subscribers) = self.subscribers.upgrade() else {
            log::debug!("Subscriber {} outlived its store", self.id);
            return false;
        };

        let removed = subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(self.id);
        log::debug!("Unsubscribed subscriber {}", self.id);
        removed
    }
}
