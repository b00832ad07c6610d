use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use confab_core::models::Conversation;
use confab_core::store::SelectionState;
use confab_core::ChatCore;

use crate::ui::state::{EmojiPickerState, SidebarState, TextInput};

/// Which surface owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Browsing the thread; keys navigate and trigger message actions
    Normal,
    /// Typing into the composer
    Compose,
    /// Typing into the sidebar filter
    SidebarFilter,
    /// Typing into the in-thread search bar
    Search,
    /// Picking from the emoji grid
    EmojiPicker,
    /// Profile card overlay
    Profile,
}

pub struct App {
    pub core: ChatCore,
    pub running: bool,
    pub input_mode: InputMode,
    pub sidebar: Rc<RefCell<SidebarState>>,
    pub emoji_picker: EmojiPickerState,
    pub search_input: TextInput,
    /// Keyboard "hover": index of the message the cursor rests on
    pub cursor: Option<usize>,
    /// First rendered line of the message pane
    pub scroll_offset: usize,
    pub pending_quit: bool,
}

impl App {
    /// Wire the sidebar in as the second subscriber on the conversation
    /// and selection publishers; the controller subscribed first inside
    /// `ChatCore::new`, so the sidebar always sees a settled view.
    pub fn new(core: ChatCore) -> Self {
        let sidebar = Rc::new(RefCell::new(SidebarState::new()));
        {
            let handle = sidebar.clone();
            core.directory()
                .borrow_mut()
                .subscribe(Box::new(move |list: &Vec<Conversation>| {
                    handle.borrow_mut().set_conversations(list.clone());
                }));
        }
        {
            let handle = sidebar.clone();
            core.selection()
                .borrow_mut()
                .subscribe(Box::new(move |state: &SelectionState| {
                    handle.borrow_mut().set_selected(state.selected.clone());
                }));
        }

        Self {
            core,
            running: true,
            input_mode: InputMode::Normal,
            sidebar,
            emoji_picker: EmojiPickerState::default(),
            search_input: TextInput::default(),
            cursor: None,
            scroll_offset: 0,
            pending_quit: false,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Drain due deferrals and pick up the one-shot focus request: a fired
    /// focus shift drops the keyboard into the composer.
    pub fn tick(&mut self, now: Instant) {
        self.core.tick(now);
        if self.core.controller().borrow_mut().take_focus_request()
            && self.input_mode != InputMode::EmojiPicker
        {
            self.input_mode = InputMode::Compose;
        }
        self.sync_cursor();
    }

    /// Id of the message under the keyboard cursor.
    pub fn cursor_message_id(&self) -> Option<String> {
        let controller = self.core.controller();
        let controller = controller.borrow();
        let index = self.cursor?;
        controller.messages().get(index).map(|m| m.id.clone())
    }

    pub fn move_cursor_up(&mut self) {
        let len = self.core.controller().borrow().messages().len();
        if len == 0 {
            return;
        }
        self.cursor = Some(match self.cursor {
            Some(0) | None => 0,
            Some(index) => index - 1,
        });
        self.publish_hover();
    }

    pub fn move_cursor_down(&mut self) {
        let len = self.core.controller().borrow().messages().len();
        if len == 0 {
            return;
        }
        self.cursor = Some(match self.cursor {
            None => len - 1,
            Some(index) => (index + 1).min(len - 1),
        });
        self.publish_hover();
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        // clamped against content height at render time
        self.scroll_offset += lines;
    }

    fn publish_hover(&mut self) {
        let id = self.cursor_message_id();
        self.core.set_hovered(id.as_deref());
    }

    /// The thread shrinks under the cursor when a removal lands; keep the
    /// cursor on a real row.
    fn sync_cursor(&mut self) {
        let len = self.core.controller().borrow().messages().len();
        match self.cursor {
            Some(_) if len == 0 => {
                self.cursor = None;
                self.core.set_hovered(None);
            }
            Some(index) if index >= len => {
                self.cursor = Some(len - 1);
                self.publish_hover();
            }
            _ => {}
        }
    }

    /// Leaving the thread view drops the keyboard hover.
    pub fn clear_cursor(&mut self) {
        self.cursor = None;
        self.core.set_hovered(None);
    }
}
