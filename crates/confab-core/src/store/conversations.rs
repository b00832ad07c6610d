//! Conversation directory and message sequences - the single source of
//! truth for everything the chat list and the thread view display.

use std::collections::HashMap;

use chrono::Local;
use tracing::debug;

use crate::constants::{NO_MESSAGES_PREVIEW, TIME_LABEL_FORMAT};
use crate::models::{Conversation, DeliveryStatus, Direction, Message, ReplyRef, UserProfile};
use crate::store::pubsub::{Publisher, Subscriber, SubscriberId};

/// Owns the conversation list and one ordered message sequence per
/// conversation. Appends and removals keep each conversation's
/// preview/timestamp in sync with the newest message and announce the
/// updated list through the conversations-changed publisher.
pub struct ConversationStore {
    conversations: Vec<Conversation>,
    threads: HashMap<String, Vec<Message>>,
    profile: UserProfile,
    changed: Publisher<Vec<Conversation>>,
}

impl ConversationStore {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            conversations: Vec::new(),
            threads: HashMap::new(),
            profile,
            changed: Publisher::new(Vec::new()),
        }
    }

    /// A store pre-populated with conversations and their threads. Seed
    /// entries are taken as-is; previews are assumed consistent.
    pub fn with_conversations(
        profile: UserProfile,
        entries: Vec<(Conversation, Vec<Message>)>,
    ) -> Self {
        let mut store = Self::new(profile);
        for (conversation, thread) in entries {
            store.threads.insert(conversation.id.clone(), thread);
            store.conversations.push(conversation);
        }
        store.changed = Publisher::new(store.conversations.clone());
        store
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// All conversations, in insertion order.
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn get(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    /// The ordered message sequence of a conversation; empty for unknown ids.
    pub fn thread(&self, conversation_id: &str) -> &[Message] {
        self.threads
            .get(conversation_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn message(&self, conversation_id: &str, message_id: &str) -> Option<&Message> {
        self.thread(conversation_id)
            .iter()
            .find(|m| m.id == message_id)
    }

    /// Append an outgoing message and move the conversation's preview and
    /// time label onto it. Returns the appended message, or `None` for an
    /// unknown conversation.
    pub fn append_message(
        &mut self,
        conversation_id: &str,
        text: &str,
        reply_to: Option<ReplyRef>,
    ) -> Option<Message> {
        let sender = self.profile.name.clone();
        let Some(thread) = self.threads.get_mut(conversation_id) else {
            debug!(conversation = conversation_id, "append ignored: unknown conversation");
            return None;
        };

        let message = Message {
            id: next_message_id(conversation_id, thread),
            text: text.to_string(),
            sent_at: Local::now().format(TIME_LABEL_FORMAT).to_string(),
            direction: Direction::Outgoing,
            sender: Some(sender),
            status: Some(DeliveryStatus::Sent),
            reply_to,
        };
        thread.push(message.clone());

        if let Some(conversation) = self.conversations.iter_mut().find(|c| c.id == conversation_id)
        {
            conversation.last_message = message.text.clone();
            conversation.last_message_at = message.sent_at.clone();
        }
        self.publish_changed();
        Some(message)
    }

    /// Remove a message by identity. When the removed message was the newest
    /// one, the conversation's preview rolls back to the new last message,
    /// or to the no-messages sentinel once the thread is empty; only those
    /// two cases touch the conversation list and publish. Unknown ids are a
    /// no-op.
    pub fn remove_message(&mut self, conversation_id: &str, message_id: &str) {
        let Some(thread) = self.threads.get_mut(conversation_id) else {
            debug!(conversation = conversation_id, "remove ignored: unknown conversation");
            return;
        };
        let Some(index) = thread.iter().position(|m| m.id == message_id) else {
            debug!(message = message_id, "remove ignored: unknown message");
            return;
        };

        let was_last = index + 1 == thread.len();
        thread.remove(index);
        if !was_last {
            return;
        }

        let (preview, time_label) = match thread.last() {
            Some(last) => (last.text.clone(), last.sent_at.clone()),
            None => (NO_MESSAGES_PREVIEW.to_string(), String::new()),
        };
        if let Some(conversation) = self.conversations.iter_mut().find(|c| c.id == conversation_id)
        {
            conversation.last_message = preview;
            conversation.last_message_at = time_label;
        }
        self.publish_changed();
    }

    /// Conversations whose name or preview contains `query`,
    /// case-insensitively. A blank query returns the full list.
    pub fn search(&self, query: &str) -> Vec<Conversation> {
        if query.trim().is_empty() {
            return self.conversations.clone();
        }
        let needle = query.to_lowercase();
        self.conversations
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.last_message.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    pub fn subscribe(&mut self, subscriber: Subscriber<Vec<Conversation>>) -> SubscriberId {
        self.changed.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.changed.unsubscribe(id);
    }

    fn publish_changed(&mut self) {
        let list = self.conversations.clone();
        self.changed.publish(list);
    }
}

/// Message ids are `{conversation}_{millis}`; the millis bump on collision
/// so two appends within the same millisecond stay distinct.
fn next_message_id(conversation_id: &str, thread: &[Message]) -> String {
    let mut millis = Local::now().timestamp_millis();
    loop {
        let candidate = format!("{}_{}", conversation_id, millis);
        if !thread.iter().any(|m| m.id == candidate) {
            return candidate;
        }
        millis += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn profile() -> UserProfile {
        UserProfile::new("user", "🙂", "8 800 555 35 35", "15.01.23")
    }

    fn seeded_store() -> ConversationStore {
        let friend = Conversation {
            id: "friend".to_string(),
            name: "friend".to_string(),
            last_message: "hi".to_string(),
            last_message_at: "09:00".to_string(),
            unread: 0,
            avatar: "🐸".to_string(),
            is_online: true,
        };
        let work = Conversation {
            id: "work".to_string(),
            name: "work".to_string(),
            last_message: "why are you late?".to_string(),
            last_message_at: "Yesterday".to_string(),
            unread: 2,
            avatar: "🏢".to_string(),
            is_online: false,
        };
        ConversationStore::with_conversations(
            profile(),
            vec![
                (
                    friend,
                    vec![Message::incoming("friend_1", "hi", "09:00", None)],
                ),
                (
                    work,
                    vec![Message::incoming(
                        "work_1",
                        "why are you late?",
                        "Yesterday",
                        Some("work"),
                    )],
                ),
            ],
        )
    }

    fn change_counter(store: &mut ConversationStore) -> Rc<RefCell<usize>> {
        let count = Rc::new(RefCell::new(0usize));
        let seen = count.clone();
        store.subscribe(Box::new(move |_| *seen.borrow_mut() += 1));
        *count.borrow_mut() = 0; // ignore the replay delivery
        count
    }

    #[test]
    fn test_append_updates_preview_and_thread() {
        let mut store = seeded_store();
        let message = store.append_message("friend", "yo", None).unwrap();

        let conversation = store.get("friend").unwrap();
        assert_eq!(conversation.last_message, "yo");
        assert_eq!(conversation.last_message_at, message.sent_at);

        let thread = store.thread("friend");
        assert_eq!(thread.len(), 2);
        assert_eq!(thread.last().unwrap().id, message.id);
        assert_eq!(thread.last().unwrap().direction, Direction::Outgoing);
        assert_eq!(thread.last().unwrap().status, Some(DeliveryStatus::Sent));
        assert_eq!(thread.last().unwrap().sender.as_deref(), Some("user"));
    }

    #[test]
    fn test_append_assigns_distinct_ids() {
        let mut store = seeded_store();
        let first = store.append_message("friend", "one", None).unwrap();
        let second = store.append_message("friend", "two", None).unwrap();
        assert_ne!(first.id, second.id);
        assert!(first.id.starts_with("friend_"));
    }

    #[test]
    fn test_append_unknown_conversation_is_ignored() {
        let mut store = seeded_store();
        let count = change_counter(&mut store);
        assert!(store.append_message("nobody", "hello?", None).is_none());
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_remove_last_message_rolls_preview_back() {
        let mut store = seeded_store();
        let message = store.append_message("friend", "yo", None).unwrap();
        store.remove_message("friend", &message.id);

        let conversation = store.get("friend").unwrap();
        assert_eq!(conversation.last_message, "hi");
        assert_eq!(conversation.last_message_at, "09:00");
        assert_eq!(store.thread("friend").len(), 1);
    }

    #[test]
    fn test_remove_sole_message_sets_sentinel() {
        let mut store = seeded_store();
        store.remove_message("work", "work_1");

        let conversation = store.get("work").unwrap();
        assert_eq!(conversation.last_message, NO_MESSAGES_PREVIEW);
        assert_eq!(conversation.last_message_at, "");
        assert!(store.thread("work").is_empty());
    }

    #[test]
    fn test_remove_middle_message_keeps_preview_and_stays_quiet() {
        let mut store = seeded_store();
        store.append_message("friend", "newest", None).unwrap();
        let count = change_counter(&mut store);

        store.remove_message("friend", "friend_1");
        assert_eq!(*count.borrow(), 0);

        let conversation = store.get("friend").unwrap();
        assert_eq!(conversation.last_message, "newest");
        assert_eq!(store.thread("friend").len(), 1);
    }

    #[test]
    fn test_remove_twice_is_idempotent() {
        let mut store = seeded_store();
        let count = change_counter(&mut store);

        store.remove_message("work", "work_1");
        assert_eq!(*count.borrow(), 1);

        store.remove_message("work", "work_1");
        assert_eq!(*count.borrow(), 1);
        assert!(store.thread("work").is_empty());
    }

    #[test]
    fn test_thread_of_unknown_conversation_is_empty() {
        let store = seeded_store();
        assert!(store.thread("nobody").is_empty());
        assert!(store.message("nobody", "x").is_none());
    }

    #[test]
    fn test_search_matches_name_and_preview() {
        let store = seeded_store();
        let by_name = store.search("FRIEND");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "friend");

        let by_preview = store.search("late");
        assert_eq!(by_preview.len(), 1);
        assert_eq!(by_preview[0].id, "work");
    }

    #[test]
    fn test_search_blank_query_returns_all() {
        let store = seeded_store();
        assert_eq!(store.search("").len(), 2);
        assert_eq!(store.search("   ").len(), 2);
    }

    #[test]
    fn test_append_publishes_updated_list() {
        let mut store = seeded_store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(Box::new(move |list: &Vec<Conversation>| {
            sink.borrow_mut()
                .push(list.iter().map(|c| c.last_message.clone()).collect::<Vec<_>>());
        }));

        store.append_message("friend", "ping", None).unwrap();
        let log = seen.borrow();
        let last = log.last().unwrap();
        assert_eq!(last[0], "ping");
    }
}
