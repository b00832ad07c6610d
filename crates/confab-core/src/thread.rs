//! View state for the open conversation's thread.
//!
//! The controller owns everything the message pane renders: a local copy
//! of the thread, per-message interaction markers, the compose draft, the
//! pending scroll request, the transient search highlight, and a queue of
//! timed deferrals covering the delete animation, highlight expiry and
//! composer focus shifts.

use std::time::Instant;

use tracing::{debug, warn};

use crate::composer::Composer;
use crate::constants::{COMPOSER_FOCUS_DELAY, DELETE_ANIMATION_DELAY, HIGHLIGHT_DURATION};
use crate::models::Message;
use crate::store::{ConversationStore, ReplyState, SearchState, SelectionState};

/// Where the message pane should scroll on the next frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollRequest {
    Bottom,
    /// Center the message with this id
    ToMessage(String),
}

/// Work the controller postponed; drained and applied by the runtime tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    /// Remove a message once its delete animation has played out
    RemoveMessage {
        conversation_id: String,
        message_id: String,
    },
    /// Drop the search highlight if it still sits on this message
    ClearHighlight { message_id: String },
    /// Hand input focus back to the composer
    FocusComposer,
}

#[derive(Debug)]
struct Deferral {
    due_at: Instant,
    action: Deferred,
}

/// Per-message interaction markers for the open thread.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    /// Message whose action bar was toggled open
    pub active: Option<String>,
    /// Message currently playing its delete animation
    pub deleting: Option<String>,
    /// Message under the cursor row
    pub hovered: Option<String>,
}

pub struct ThreadController {
    conversation_id: Option<String>,
    messages: Vec<Message>,
    interaction: InteractionState,
    composer: Composer,
    /// Search-jump highlight; at most one message carries it
    highlight: Option<String>,
    scroll: Option<ScrollRequest>,
    focus_composer: bool,
    deferrals: Vec<Deferral>,
}

impl Default for ThreadController {
    fn default() -> Self {
        Self::new()
    }
}

impl ThreadController {
    pub fn new() -> Self {
        Self {
            conversation_id: None,
            messages: Vec::new(),
            interaction: InteractionState::default(),
            composer: Composer::new(),
            highlight: None,
            scroll: None,
            focus_composer: false,
            deferrals: Vec::new(),
        }
    }

    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation_id.as_deref()
    }

    /// The rendered thread, a copy refreshed from the directory on load,
    /// append and removal.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut Composer {
        &mut self.composer
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn highlight(&self) -> Option<&str> {
        self.highlight.as_deref()
    }

    pub fn is_active(&self, message_id: &str) -> bool {
        self.interaction.active.as_deref() == Some(message_id)
    }

    pub fn is_deleting(&self, message_id: &str) -> bool {
        self.interaction.deleting.as_deref() == Some(message_id)
    }

    pub fn is_highlighted(&self, message_id: &str) -> bool {
        self.highlight.as_deref() == Some(message_id)
    }

    /// Whether a message's action affordances are visible: the message is
    /// hovered or toggled active, and not mid-deletion.
    pub fn should_show_actions(&self, message_id: &str) -> bool {
        !self.is_deleting(message_id)
            && (self.is_active(message_id)
                || self.interaction.hovered.as_deref() == Some(message_id))
    }

    /// Load the thread of the newly selected conversation.
    ///
    /// Interaction markers, the highlight and the draft belong to the
    /// previous thread and reset. Pending deferrals stay queued; their
    /// identity checks keep them away from the new view.
    pub(crate) fn show_conversation(
        &mut self,
        state: &SelectionState,
        directory: &ConversationStore,
    ) {
        self.conversation_id = state.selected.clone();
        self.messages = match &state.selected {
            Some(id) => directory.thread(id).to_vec(),
            None => Vec::new(),
        };
        self.interaction = InteractionState::default();
        self.highlight = None;
        self.composer.clear();
        self.scroll = Some(ScrollRequest::Bottom);
    }

    /// Reply-state transition: opening the banner moves input focus to the
    /// composer after a short delay.
    pub(crate) fn on_reply_state(&mut self, state: &ReplyState, now: Instant) {
        if state.is_replying {
            self.schedule_composer_focus(now);
        }
    }

    /// Search-state transition: jump to the current result and highlight
    /// it. A new highlight replaces the previous one immediately; the old
    /// expiry timer dies on its identity check.
    pub(crate) fn on_search_state(&mut self, state: &SearchState, now: Instant) {
        let Some(result) = state.current_result() else {
            return;
        };
        let message_id = result.message.id.clone();
        if self.messages.iter().all(|m| m.id != message_id) {
            warn!(message = %message_id, "search jump target is not in the view");
            return;
        }
        self.scroll = Some(ScrollRequest::ToMessage(message_id.clone()));
        self.highlight = Some(message_id.clone());
        self.deferrals.push(Deferral {
            due_at: now + HIGHLIGHT_DURATION,
            action: Deferred::ClearHighlight { message_id },
        });
    }

    /// Toggle the action bar on a message; a second message replaces the
    /// first rather than stacking. Ignored while the message is deleting.
    pub fn toggle_active(&mut self, message_id: &str) {
        if self.is_deleting(message_id) {
            debug!(message = message_id, "toggle ignored: message is deleting");
            return;
        }
        self.interaction.active = if self.is_active(message_id) {
            None
        } else {
            Some(message_id.to_string())
        };
    }

    /// Close the action bar; clicks outside any message land here.
    pub fn clear_active(&mut self) {
        self.interaction.active = None;
    }

    /// Record the hovered message. A message marked deleting cannot become
    /// hovered; clearing the hover is always allowed.
    pub fn set_hovered(&mut self, message_id: Option<&str>) {
        if let Some(id) = message_id {
            if self.is_deleting(id) {
                return;
            }
        }
        self.interaction.hovered = message_id.map(str::to_string);
    }

    /// Mark a message deleting and queue its removal for after the exit
    /// animation. A second delete of a message already deleting is ignored.
    pub fn begin_delete(&mut self, conversation_id: &str, message_id: &str, now: Instant) {
        if self.is_deleting(message_id) {
            debug!(message = message_id, "delete ignored: already deleting");
            return;
        }
        self.interaction.deleting = Some(message_id.to_string());
        self.deferrals.push(Deferral {
            due_at: now + DELETE_ANIMATION_DELAY,
            action: Deferred::RemoveMessage {
                conversation_id: conversation_id.to_string(),
                message_id: message_id.to_string(),
            },
        });
    }

    /// Called once a deferred removal has been applied to the directory:
    /// refresh the view if it still shows that conversation, and clear
    /// whichever markers still name the removed message.
    pub(crate) fn after_remove(
        &mut self,
        directory: &ConversationStore,
        conversation_id: &str,
        message_id: &str,
    ) {
        if self.conversation_id.as_deref() == Some(conversation_id) {
            self.messages = directory.thread(conversation_id).to_vec();
        }
        if self.interaction.deleting.as_deref() == Some(message_id) {
            self.interaction.deleting = None;
        }
        if self.interaction.active.as_deref() == Some(message_id) {
            self.interaction.active = None;
        }
        if self.interaction.hovered.as_deref() == Some(message_id) {
            self.interaction.hovered = None;
        }
    }

    /// Refresh the view after an append, reset the interaction markers and
    /// follow the new message to the bottom.
    pub(crate) fn after_send(&mut self, directory: &ConversationStore, conversation_id: &str) {
        if self.conversation_id.as_deref() == Some(conversation_id) {
            self.messages = directory.thread(conversation_id).to_vec();
        }
        self.interaction = InteractionState::default();
        self.scroll = Some(ScrollRequest::Bottom);
    }

    /// Queue a composer focus shift; the reply banner and the emoji picker
    /// both hand focus back this way.
    pub(crate) fn schedule_composer_focus(&mut self, now: Instant) {
        self.deferrals.push(Deferral {
            due_at: now + COMPOSER_FOCUS_DELAY,
            action: Deferred::FocusComposer,
        });
    }

    /// Deferred actions whose deadline has passed, in queue order.
    pub(crate) fn take_due_deferrals(&mut self, now: Instant) -> Vec<Deferred> {
        let queued = std::mem::take(&mut self.deferrals);
        let (due, pending): (Vec<_>, Vec<_>) =
            queued.into_iter().partition(|deferral| deferral.due_at <= now);
        self.deferrals = pending;
        due.into_iter().map(|deferral| deferral.action).collect()
    }

    /// Clear the highlight, unless it has already moved to another message.
    pub(crate) fn clear_highlight_if(&mut self, message_id: &str) {
        if self.highlight.as_deref() == Some(message_id) {
            self.highlight = None;
        }
    }

    pub(crate) fn request_composer_focus(&mut self) {
        self.focus_composer = true;
    }

    /// One-shot: whether the render layer should move focus to the
    /// composer this frame.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_composer)
    }

    /// One-shot: where the message pane should scroll this frame.
    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.scroll.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::models::{Conversation, DeliveryStatus, Message, UserProfile};
    use crate::store::{SearchResult, SearchStore};

    fn directory() -> ConversationStore {
        let thread_a = vec![
            Message::incoming("a_1", "morning", "09:00", Some("ann")),
            Message::outgoing("a_2", "hey", "09:01", DeliveryStatus::Read),
            Message::incoming("a_3", "lunch today?", "09:02", Some("ann")),
        ];
        let thread_b = vec![Message::incoming("b_1", "ping", "08:00", Some("bob"))];
        ConversationStore::with_conversations(
            UserProfile::new("me", "🙂", "555-0100", "15.01.23"),
            vec![
                (Conversation::new("a", "ann", "A"), thread_a),
                (Conversation::new("b", "bob", "B"), thread_b),
            ],
        )
    }

    fn selected(id: &str) -> SelectionState {
        SelectionState {
            selected: Some(id.to_string()),
        }
    }

    fn search_state(directory: &ConversationStore, conversation_id: &str, query: &str) -> SearchState {
        let mut search = SearchStore::new();
        search.start();
        search.search(directory.thread(conversation_id), query);
        search.snapshot()
    }

    #[test]
    fn test_show_conversation_loads_thread() {
        let directory = directory();
        let mut controller = ThreadController::new();

        controller.show_conversation(&selected("a"), &directory);

        assert_eq!(controller.conversation_id(), Some("a"));
        assert_eq!(controller.messages().len(), 3);
        assert_eq!(controller.take_scroll_request(), Some(ScrollRequest::Bottom));
        assert!(controller.take_scroll_request().is_none());
    }

    #[test]
    fn test_switch_resets_view_state() {
        let directory = directory();
        let mut controller = ThreadController::new();
        let t0 = Instant::now();

        controller.show_conversation(&selected("a"), &directory);
        controller.toggle_active("a_1");
        controller.set_hovered(Some("a_2"));
        controller.composer_mut().insert_str("draft");
        controller.on_search_state(&search_state(&directory, "a", "lunch"), t0);
        assert!(controller.is_highlighted("a_3"));

        controller.show_conversation(&selected("b"), &directory);

        assert_eq!(controller.interaction(), &InteractionState::default());
        assert!(controller.highlight().is_none());
        assert!(controller.composer().text().is_empty());
        assert_eq!(controller.messages().len(), 1);
    }

    #[test]
    fn test_toggle_active_flips_and_replaces() {
        let mut controller = ThreadController::new();

        controller.toggle_active("a_1");
        assert!(controller.is_active("a_1"));

        controller.toggle_active("a_2");
        assert!(controller.is_active("a_2"));
        assert!(!controller.is_active("a_1"));

        controller.toggle_active("a_2");
        assert!(controller.interaction().active.is_none());
    }

    #[test]
    fn test_deleting_message_blocks_interaction() {
        let mut controller = ThreadController::new();
        let t0 = Instant::now();

        controller.begin_delete("a", "a_1", t0);
        controller.toggle_active("a_1");
        controller.set_hovered(Some("a_1"));

        assert!(!controller.is_active("a_1"));
        assert!(controller.interaction().hovered.is_none());

        // a second delete must not queue a second removal
        controller.begin_delete("a", "a_1", t0);
        let due = controller.take_due_deferrals(t0 + DELETE_ANIMATION_DELAY);
        assert_eq!(due.len(), 1);
    }

    #[test]
    fn test_begin_delete_defers_removal() {
        let mut controller = ThreadController::new();
        let t0 = Instant::now();

        controller.begin_delete("a", "a_2", t0);
        assert!(controller.is_deleting("a_2"));
        assert!(controller
            .take_due_deferrals(t0 + Duration::from_millis(299))
            .is_empty());

        let due = controller.take_due_deferrals(t0 + DELETE_ANIMATION_DELAY);
        assert_eq!(
            due,
            vec![Deferred::RemoveMessage {
                conversation_id: "a".to_string(),
                message_id: "a_2".to_string(),
            }]
        );
    }

    #[test]
    fn test_after_remove_refreshes_and_clears_markers() {
        let mut directory = directory();
        let mut controller = ThreadController::new();
        let t0 = Instant::now();

        controller.show_conversation(&selected("a"), &directory);
        controller.set_hovered(Some("a_3"));
        controller.begin_delete("a", "a_3", t0);

        directory.remove_message("a", "a_3");
        controller.after_remove(&directory, "a", "a_3");

        assert_eq!(controller.messages().len(), 2);
        assert!(!controller.is_deleting("a_3"));
        assert!(controller.interaction().hovered.is_none());
    }

    #[test]
    fn test_after_remove_elsewhere_keeps_view() {
        let mut directory = directory();
        let mut controller = ThreadController::new();

        controller.show_conversation(&selected("a"), &directory);
        directory.remove_message("b", "b_1");
        controller.after_remove(&directory, "b", "b_1");

        assert_eq!(controller.messages().len(), 3);
    }

    #[test]
    fn test_deferrals_survive_switch() {
        let directory = directory();
        let mut controller = ThreadController::new();
        let t0 = Instant::now();

        controller.show_conversation(&selected("a"), &directory);
        controller.begin_delete("a", "a_1", t0);
        controller.show_conversation(&selected("b"), &directory);

        // the marker was view state, the removal is not
        assert!(!controller.is_deleting("a_1"));
        let due = controller.take_due_deferrals(t0 + DELETE_ANIMATION_DELAY);
        assert_eq!(due.len(), 1);
    }

    #[test]
    fn test_search_jump_scrolls_and_highlights() {
        let directory = directory();
        let mut controller = ThreadController::new();
        let t0 = Instant::now();

        controller.show_conversation(&selected("a"), &directory);
        controller.take_scroll_request();

        controller.on_search_state(&search_state(&directory, "a", "lunch"), t0);

        assert_eq!(
            controller.take_scroll_request(),
            Some(ScrollRequest::ToMessage("a_3".to_string()))
        );
        assert!(controller.is_highlighted("a_3"));

        let due = controller.take_due_deferrals(t0 + HIGHLIGHT_DURATION);
        assert_eq!(
            due,
            vec![Deferred::ClearHighlight {
                message_id: "a_3".to_string(),
            }]
        );
    }

    #[test]
    fn test_highlight_clear_checks_identity() {
        let directory = directory();
        let mut controller = ThreadController::new();
        let t0 = Instant::now();

        controller.show_conversation(&selected("a"), &directory);
        controller.on_search_state(&search_state(&directory, "a", "morning"), t0);
        assert!(controller.is_highlighted("a_1"));
        controller.on_search_state(&search_state(&directory, "a", "lunch"), t0);

        // the stale timer for a_1 fires after the highlight moved on
        controller.clear_highlight_if("a_1");
        assert!(controller.is_highlighted("a_3"));

        controller.clear_highlight_if("a_3");
        assert!(controller.highlight().is_none());
    }

    #[test]
    fn test_jump_to_missing_message_is_ignored() {
        let directory = directory();
        let mut controller = ThreadController::new();
        let t0 = Instant::now();

        controller.show_conversation(&selected("a"), &directory);
        controller.take_scroll_request();

        let state = SearchState {
            is_searching: true,
            query: "x".to_string(),
            results: vec![SearchResult {
                message: Message::incoming("ghost", "x", "09:00", None),
                position: 0,
                match_count: 1,
            }],
            current: Some(0),
            total_matches: 1,
        };
        controller.on_search_state(&state, t0);

        assert!(controller.take_scroll_request().is_none());
        assert!(controller.highlight().is_none());
    }

    #[test]
    fn test_reply_banner_schedules_focus() {
        let mut controller = ThreadController::new();
        let t0 = Instant::now();

        let replying = ReplyState {
            is_replying: true,
            reply_to: None,
            target_message_id: None,
        };
        controller.on_reply_state(&replying, t0);
        let due = controller.take_due_deferrals(t0 + COMPOSER_FOCUS_DELAY);
        assert_eq!(due, vec![Deferred::FocusComposer]);

        controller.on_reply_state(&ReplyState::default(), t0);
        assert!(controller
            .take_due_deferrals(t0 + Duration::from_secs(1))
            .is_empty());
    }

    #[test]
    fn test_focus_request_is_one_shot() {
        let mut controller = ThreadController::new();

        controller.request_composer_focus();
        assert!(controller.take_focus_request());
        assert!(!controller.take_focus_request());
    }

    #[test]
    fn test_should_show_actions() {
        let mut controller = ThreadController::new();
        let t0 = Instant::now();

        controller.set_hovered(Some("a_1"));
        assert!(controller.should_show_actions("a_1"));
        assert!(!controller.should_show_actions("a_2"));

        controller.toggle_active("a_2");
        assert!(controller.should_show_actions("a_2"));

        controller.begin_delete("a", "a_1", t0);
        assert!(!controller.should_show_actions("a_1"));
    }

    #[test]
    fn test_after_send_refreshes_and_scrolls() {
        let mut directory = directory();
        let mut controller = ThreadController::new();

        controller.show_conversation(&selected("a"), &directory);
        controller.take_scroll_request();
        controller.toggle_active("a_1");

        directory.append_message("a", "on my way", None);
        controller.after_send(&directory, "a");

        assert_eq!(controller.messages().len(), 4);
        assert_eq!(controller.take_scroll_request(), Some(ScrollRequest::Bottom));
        assert!(controller.interaction().active.is_none());
    }
}
