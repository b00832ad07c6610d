//! Which conversation is open. Reply and search mode both reset off this
//! store's transitions, making it the one cancellation signal in the app.

use tracing::debug;

use crate::store::conversations::ConversationStore;
use crate::store::pubsub::{Publisher, Subscriber, SubscriberId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub selected: Option<String>,
}

pub struct SelectionStore {
    state: Publisher<SelectionState>,
}

impl SelectionStore {
    /// Starts on the first conversation when the directory has one.
    pub fn new(directory: &ConversationStore) -> Self {
        let selected = directory.conversations().first().map(|c| c.id.clone());
        Self {
            state: Publisher::new(SelectionState { selected }),
        }
    }

    pub fn snapshot(&self) -> SelectionState {
        self.state.snapshot()
    }

    pub fn selected_id(&self) -> Option<String> {
        self.state.value().selected.clone()
    }

    /// Switch the open conversation. Ids the directory cannot resolve are
    /// ignored. Re-selecting the current conversation publishes again;
    /// subscribers simply reload the same thread.
    pub fn select(&mut self, directory: &ConversationStore, id: &str) {
        if directory.get(id).is_none() {
            debug!(conversation = id, "select ignored: unknown conversation");
            return;
        }
        self.state.publish(SelectionState {
            selected: Some(id.to_string()),
        });
    }

    pub fn subscribe(&mut self, subscriber: Subscriber<SelectionState>) -> SubscriberId {
        self.state.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.state.unsubscribe(id);
    }
}
