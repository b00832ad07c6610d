//! Ordered publish/subscribe cell embedded in each state store.
//!
//! A `Publisher` retains the latest value and fans every publish out to its
//! subscribers synchronously, in subscription order. A new subscriber
//! receives the retained value immediately, so late wiring still observes
//! the initial state.

/// Callback invoked with each published value.
pub type Subscriber<T> = Box<dyn FnMut(&T)>;

/// Handle returned by [`Publisher::subscribe`]; ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(u64);

pub struct Publisher<T> {
    value: T,
    subscribers: Vec<(SubscriberId, Subscriber<T>)>,
    next_id: u64,
}

impl<T: Clone> Publisher<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: initial,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Borrow the retained value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Clone of the retained value.
    pub fn snapshot(&self) -> T {
        self.value.clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Register `subscriber` and hand it the retained value right away.
    pub fn subscribe(&mut self, mut subscriber: Subscriber<T>) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        subscriber(&self.value);
        self.subscribers.push((id, subscriber));
        id
    }

    /// Remove a subscriber; unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(existing, _)| *existing != id);
    }

    /// Replace the retained value and notify every subscriber in
    /// subscription order.
    ///
    /// Callbacks run while the owning store is mutably borrowed: they must
    /// work with the payload argument and with other stores, never call back
    /// into the store that is currently notifying.
    pub fn publish(&mut self, value: T) {
        self.value = value;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.value);
        }
    }
}

impl<T: Clone + Default> Default for Publisher<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
