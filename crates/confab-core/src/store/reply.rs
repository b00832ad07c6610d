//! Reply-composition state shared between the thread view and the composer.

use crate::models::{Conversation, Message, ReplyRef};
use crate::store::pubsub::{Publisher, Subscriber, SubscriberId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplyState {
    pub is_replying: bool,
    /// Snapshot of the message being replied to
    pub reply_to: Option<ReplyRef>,
    /// Id of the original message, for navigating back to it
    pub target_message_id: Option<String>,
}

pub struct ReplyStore {
    state: Publisher<ReplyState>,
}

impl Default for ReplyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplyStore {
    pub fn new() -> Self {
        Self {
            state: Publisher::default(),
        }
    }

    /// Snapshot for synchronous reads at send time, so the outgoing message
    /// is built from the same state the banner showed.
    pub fn snapshot(&self) -> ReplyState {
        self.state.snapshot()
    }

    pub fn is_replying(&self) -> bool {
        self.state.value().is_replying
    }

    /// Begin replying to `message`. The banner needs a sender name even for
    /// messages that carry none, so the conversation's display name fills in.
    pub fn start_reply(&mut self, message: &Message, conversation: &Conversation) {
        let reference = ReplyRef::from_message(message, &conversation.name);
        self.state.publish(ReplyState {
            is_replying: true,
            target_message_id: Some(reference.message_id.clone()),
            reply_to: Some(reference),
        });
    }

    /// The user abandoned the reply.
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// The reply was sent. Resets to the same state as [`cancel`], kept as a
    /// separate hook so subscribers can tell the two apart later without a
    /// contract change.
    ///
    /// [`cancel`]: ReplyStore::cancel
    pub fn complete(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.state.publish(ReplyState::default());
    }

    pub fn subscribe(&mut self, subscriber: Subscriber<ReplyState>) -> SubscriberId {
        self.state.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.state.unsubscribe(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{PREVIEW_ELLIPSIS, REPLY_PREVIEW_MAX_CHARS};
    use crate::models::Direction;

    fn conversation() -> Conversation {
        Conversation::new("friend", "friend", "🐸")
    }

    #[test]
    fn test_start_reply_builds_reference() {
        let mut store = ReplyStore::new();
        let message = Message::incoming("friend_1", "see you at eight", "09:10", Some("sam"));
        store.start_reply(&message, &conversation());

        let state = store.snapshot();
        assert!(state.is_replying);
        assert_eq!(state.target_message_id.as_deref(), Some("friend_1"));
        let reference = state.reply_to.unwrap();
        assert_eq!(reference.sender, "sam");
        assert_eq!(reference.preview, "see you at eight");
        assert_eq!(reference.direction, Direction::Incoming);
    }

    #[test]
    fn test_sender_falls_back_to_conversation_name() {
        let mut store = ReplyStore::new();
        let message = Message::incoming("friend_1", "hi", "09:10", None);
        store.start_reply(&message, &conversation());
        assert_eq!(store.snapshot().reply_to.unwrap().sender, "friend");
    }

    #[test]
    fn test_long_text_is_ellipsized() {
        let mut store = ReplyStore::new();
        let long = "x".repeat(REPLY_PREVIEW_MAX_CHARS + 5);
        let message = Message::incoming("friend_1", &long, "09:10", None);
        store.start_reply(&message, &conversation());

        let preview = store.snapshot().reply_to.unwrap().preview;
        assert_eq!(
            preview.chars().count(),
            REPLY_PREVIEW_MAX_CHARS + PREVIEW_ELLIPSIS.chars().count()
        );
        assert!(preview.ends_with(PREVIEW_ELLIPSIS));
    }

    #[test]
    fn test_cancel_resets_state() {
        let mut store = ReplyStore::new();
        let message = Message::incoming("friend_1", "hi", "09:10", None);
        store.start_reply(&message, &conversation());
        store.cancel();

        let state = store.snapshot();
        assert!(!state.is_replying);
        assert!(state.reply_to.is_none());
        assert!(state.target_message_id.is_none());
    }

    #[test]
    fn test_complete_resets_state() {
        let mut store = ReplyStore::new();
        let message = Message::incoming("friend_1", "hi", "09:10", None);
        store.start_reply(&message, &conversation());
        store.complete();
        assert_eq!(store.snapshot(), ReplyState::default());
        assert!(!store.is_replying());
    }
}
