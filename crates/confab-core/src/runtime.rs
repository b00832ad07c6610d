//! Application root owning the stores and their wiring.
//!
//! `ChatCore` constructs every store once, subscribes the thread controller
//! to all of them, and exposes the intent surface the render layer calls.
//! Stores live behind `Rc<RefCell<…>>` handles; subscriber callbacks run
//! while the publishing store is mutably borrowed, so a callback may touch
//! the payload and *other* stores but never the one currently notifying.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use tracing::debug;

use crate::models::ReplyRef;
use crate::store::{
    ConversationStore, ReplyState, ReplyStore, SearchState, SearchStore, SelectionState,
    SelectionStore,
};
use crate::thread::{Deferred, ThreadController};

pub struct ChatCore {
    directory: Rc<RefCell<ConversationStore>>,
    selection: Rc<RefCell<SelectionStore>>,
    reply: Rc<RefCell<ReplyStore>>,
    search: Rc<RefCell<SearchStore>>,
    controller: Rc<RefCell<ThreadController>>,
}

impl ChatCore {
    /// Wire the stores together. The controller subscribes first on every
    /// publisher, so later subscribers (the sidebar) observe a view the
    /// controller has already reacted to. Selection replays its initial
    /// state on subscribe, which loads the first conversation's thread.
    pub fn new(directory: ConversationStore) -> Self {
        let selection = SelectionStore::new(&directory);
        let directory = Rc::new(RefCell::new(directory));
        let selection = Rc::new(RefCell::new(selection));
        let reply = Rc::new(RefCell::new(ReplyStore::new()));
        let search = Rc::new(RefCell::new(SearchStore::new()));
        let controller = Rc::new(RefCell::new(ThreadController::new()));

        {
            let handle = controller.clone();
            reply.borrow_mut().subscribe(Box::new(move |state: &ReplyState| {
                handle.borrow_mut().on_reply_state(state, Instant::now());
            }));
        }
        {
            let handle = controller.clone();
            search.borrow_mut().subscribe(Box::new(move |state: &SearchState| {
                handle.borrow_mut().on_search_state(state, Instant::now());
            }));
        }
        {
            // Switching conversations is the one cancellation signal:
            // reply and search reset before the new thread loads.
            let reply = reply.clone();
            let search = search.clone();
            let directory = directory.clone();
            let handle = controller.clone();
            selection
                .borrow_mut()
                .subscribe(Box::new(move |state: &SelectionState| {
                    reply.borrow_mut().cancel();
                    search.borrow_mut().stop();
                    handle.borrow_mut().show_conversation(state, &directory.borrow());
                }));
        }

        Self {
            directory,
            selection,
            reply,
            search,
            controller,
        }
    }

    // Handles for the render layer; reads go straight to the stores.

    pub fn directory(&self) -> Rc<RefCell<ConversationStore>> {
        self.directory.clone()
    }

    pub fn selection(&self) -> Rc<RefCell<SelectionStore>> {
        self.selection.clone()
    }

    pub fn controller(&self) -> Rc<RefCell<ThreadController>> {
        self.controller.clone()
    }

    pub fn reply_snapshot(&self) -> ReplyState {
        self.reply.borrow().snapshot()
    }

    pub fn search_snapshot(&self) -> SearchState {
        self.search.borrow().snapshot()
    }

    pub fn is_searching(&self) -> bool {
        self.search.borrow().is_searching()
    }

    // Intents

    pub fn select_conversation(&self, id: &str) {
        self.selection.borrow_mut().select(&self.directory.borrow(), id);
    }

    /// Send the draft to the open conversation. Blank drafts and the
    /// no-selection case are silently dropped.
    pub fn send_message(&self) {
        let Some(conversation_id) = self.selection.borrow().selected_id() else {
            debug!("send ignored: no conversation selected");
            return;
        };
        if self.controller.borrow().composer().is_blank() {
            return;
        }
        let text = self.controller.borrow_mut().composer_mut().take();
        let reply_to = self.take_reply_reference(&conversation_id);
        self.directory
            .borrow_mut()
            .append_message(&conversation_id, text.trim(), reply_to);
        self.controller
            .borrow_mut()
            .after_send(&self.directory.borrow(), &conversation_id);
        self.reply.borrow_mut().complete();
    }

    /// The reply snapshot is read at send time so the outgoing message is
    /// built from the state the banner showed. A snapshot that lost its
    /// reference is rebuilt from the target message when it still exists.
    fn take_reply_reference(&self, conversation_id: &str) -> Option<ReplyRef> {
        let state = self.reply.borrow().snapshot();
        if !state.is_replying {
            return None;
        }
        if state.reply_to.is_some() {
            return state.reply_to;
        }
        let target = state.target_message_id?;
        let directory = self.directory.borrow();
        let message = directory.message(conversation_id, &target)?;
        let fallback = directory
            .get(conversation_id)
            .map(|c| c.name.clone())
            .unwrap_or_default();
        Some(ReplyRef::from_message(message, &fallback))
    }

    /// Mark a message deleting; the removal itself fires from [`tick`] once
    /// the delete animation has played.
    ///
    /// [`tick`]: ChatCore::tick
    pub fn delete_message(&self, message_id: &str, now: Instant) {
        let Some(conversation_id) = self
            .controller
            .borrow()
            .conversation_id()
            .map(str::to_string)
        else {
            return;
        };
        self.controller
            .borrow_mut()
            .begin_delete(&conversation_id, message_id, now);
    }

    pub fn toggle_active(&self, message_id: &str) {
        self.controller.borrow_mut().toggle_active(message_id);
    }

    pub fn clear_active(&self) {
        self.controller.borrow_mut().clear_active();
    }

    pub fn set_hovered(&self, message_id: Option<&str>) {
        self.controller.borrow_mut().set_hovered(message_id);
    }

    /// Open the reply banner for a message in the current thread. Ignored
    /// while the message is mid-deletion or when the id cannot be resolved.
    pub fn start_reply_to(&self, message_id: &str) {
        let conversation_id = {
            let controller = self.controller.borrow();
            if controller.is_deleting(message_id) {
                debug!(message = message_id, "reply ignored: message is deleting");
                return;
            }
            let Some(id) = controller.conversation_id() else {
                return;
            };
            id.to_string()
        };
        {
            let directory = self.directory.borrow();
            let (Some(message), Some(conversation)) = (
                directory.message(&conversation_id, message_id),
                directory.get(&conversation_id),
            ) else {
                debug!(message = message_id, "reply ignored: unknown message");
                return;
            };
            self.reply.borrow_mut().start_reply(message, conversation);
        }
        self.controller.borrow_mut().clear_active();
    }

    pub fn cancel_reply(&self) {
        self.reply.borrow_mut().cancel();
    }

    pub fn start_search(&self) {
        self.search.borrow_mut().start();
    }

    pub fn stop_search(&self) {
        self.search.borrow_mut().stop();
    }

    /// Run the query against the open conversation's thread.
    pub fn set_search_query(&self, query: &str) {
        let Some(conversation_id) = self
            .controller
            .borrow()
            .conversation_id()
            .map(str::to_string)
        else {
            return;
        };
        let directory = self.directory.borrow();
        self.search
            .borrow_mut()
            .search(directory.thread(&conversation_id), query);
    }

    pub fn next_result(&self) {
        self.search.borrow_mut().next();
    }

    pub fn previous_result(&self) {
        self.search.borrow_mut().previous();
    }

    /// Drop a picked emoji into the draft and hand focus back to the
    /// composer shortly after.
    pub fn insert_emoji(&self, symbol: &str, now: Instant) {
        let mut controller = self.controller.borrow_mut();
        controller.composer_mut().insert_str(symbol);
        controller.schedule_composer_focus(now);
    }

    /// Apply every deferral whose deadline has passed. Each one re-checks
    /// its target identity before touching view state, so a stale timer
    /// cannot clobber newer state.
    pub fn tick(&self, now: Instant) {
        let due = self.controller.borrow_mut().take_due_deferrals(now);
        for action in due {
            match action {
                Deferred::RemoveMessage {
                    conversation_id,
                    message_id,
                } => {
                    self.directory
                        .borrow_mut()
                        .remove_message(&conversation_id, &message_id);
                    self.controller.borrow_mut().after_remove(
                        &self.directory.borrow(),
                        &conversation_id,
                        &message_id,
                    );
                }
                Deferred::ClearHighlight { message_id } => {
                    self.controller.borrow_mut().clear_highlight_if(&message_id);
                }
                Deferred::FocusComposer => {
                    self.controller.borrow_mut().request_composer_focus();
                }
            }
        }
    }
}
