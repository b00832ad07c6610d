//! View-local state: the sidebar filter/selection and the emoji picker
//! grid. Both hold presentation state only; every mutation of shared chat
//! state goes through `ChatCore` intents.

use confab_core::emoji;
use confab_core::models::Conversation;

// ============================================================================
// Text input - single-line query/filter editing with a char cursor
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    /// Char index into `value`
    cursor: usize,
}

impl TextInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn insert_char(&mut self, c: char) {
        let byte = byte_index(&self.value, self.cursor);
        self.value.insert(byte, c);
        self.cursor += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let byte = byte_index(&self.value, self.cursor);
        self.value.remove(byte);
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

fn byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(byte, _)| byte)
        .unwrap_or(s.len())
}

// ============================================================================
// Sidebar - conversation list with filter box
// ============================================================================

/// The sidebar subscribes to the conversations-changed and selection
/// publishers (after the thread controller, so it always draws a list the
/// controller has already reacted to) and keeps its own copies here.
#[derive(Debug, Clone, Default)]
pub struct SidebarState {
    conversations: Vec<Conversation>,
    selected: Option<String>,
    pub filter: TextInput,
    pub filter_visible: bool,
    /// Row the filter-mode cursor rests on, an index into [`visible`]
    ///
    /// [`visible`]: SidebarState::visible
    pub cursor: usize,
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_conversations(&mut self, conversations: Vec<Conversation>) {
        self.conversations = conversations;
        self.clamp_cursor();
    }

    pub fn set_selected(&mut self, selected: Option<String>) {
        self.selected = selected;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The rows the sidebar draws: the subscribed list, narrowed by the
    /// filter the same way the directory narrows its own search (name or
    /// preview, case-insensitive).
    pub fn visible(&self) -> Vec<&Conversation> {
        let query = self.filter.value().trim().to_lowercase();
        if query.is_empty() {
            return self.conversations.iter().collect();
        }
        self.conversations
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&query)
                    || c.last_message.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn cursor_row(&self) -> Option<&Conversation> {
        self.visible().get(self.cursor).copied()
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        let rows = self.visible().len();
        if rows > 0 && self.cursor + 1 < rows {
            self.cursor += 1;
        }
    }

    /// The conversation after the selected one, wrapping. Used for quick
    /// switching from the keyboard without entering filter mode.
    pub fn next_id(&self) -> Option<String> {
        self.neighbor_id(1)
    }

    pub fn previous_id(&self) -> Option<String> {
        self.neighbor_id(-1)
    }

    fn neighbor_id(&self, step: isize) -> Option<String> {
        if self.conversations.is_empty() {
            return None;
        }
        let len = self.conversations.len() as isize;
        let current = self
            .selected
            .as_deref()
            .and_then(|id| self.conversations.iter().position(|c| c.id == id))
            .unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len) as usize;
        Some(self.conversations[next].id.clone())
    }

    pub fn hide_filter(&mut self) {
        self.filter_visible = false;
        self.filter.clear();
        self.cursor = 0;
    }

    fn clamp_cursor(&mut self) {
        let rows = self.visible().len();
        if rows == 0 {
            self.cursor = 0;
        } else if self.cursor >= rows {
            self.cursor = rows - 1;
        }
    }
}

// ============================================================================
// Emoji picker - cursor over the fixed 4x4 palette grid
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct EmojiPickerState {
    cursor: usize,
}

impl EmojiPickerState {
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> &'static str {
        emoji::PALETTE[self.cursor]
    }

    pub fn move_left(&mut self) {
        if self.cursor % emoji::COLUMNS > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor % emoji::COLUMNS + 1 < emoji::COLUMNS {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor >= emoji::COLUMNS {
            self.cursor -= emoji::COLUMNS;
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + emoji::COLUMNS < emoji::PALETTE.len() {
            self.cursor += emoji::COLUMNS;
        }
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conversation(id: &str, name: &str, preview: &str) -> Conversation {
        let mut c = Conversation::new(id, name, "🙂");
        c.last_message = preview.to_string();
        c
    }

    #[test]
    fn test_text_input_edits_at_cursor() {
        let mut input = TextInput::default();
        for c in "hllo".chars() {
            input.insert_char(c);
        }
        input.move_cursor_left();
        input.move_cursor_left();
        input.move_cursor_left();
        input.insert_char('e');
        assert_eq!(input.value(), "hello");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_text_input_delete_handles_multibyte() {
        let mut input = TextInput::default();
        input.insert_char('п');
        input.insert_char('р');
        input.delete_char();
        assert_eq!(input.value(), "п");
        input.delete_char();
        input.delete_char();
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_sidebar_filter_narrows_rows() {
        let mut sidebar = SidebarState::new();
        sidebar.set_conversations(vec![
            conversation("a", "Maria", "see you"),
            conversation("b", "Daniel", "guitar business"),
        ]);

        for c in "GUIT".chars() {
            sidebar.filter.insert_char(c);
        }
        let rows = sidebar.visible();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "b");
    }

    #[test]
    fn test_sidebar_cursor_clamps_to_filtered_rows() {
        let mut sidebar = SidebarState::new();
        sidebar.set_conversations(vec![
            conversation("a", "Maria", "x"),
            conversation("b", "Daniel", "y"),
        ]);
        sidebar.move_cursor_down();
        assert_eq!(sidebar.cursor, 1);

        sidebar.set_conversations(vec![conversation("a", "Maria", "x")]);
        assert_eq!(sidebar.cursor, 0);
        assert_eq!(sidebar.cursor_row().unwrap().id, "a");
    }

    #[test]
    fn test_sidebar_neighbor_wraps() {
        let mut sidebar = SidebarState::new();
        sidebar.set_conversations(vec![
            conversation("a", "A", ""),
            conversation("b", "B", ""),
            conversation("c", "C", ""),
        ]);
        sidebar.set_selected(Some("c".to_string()));
        assert_eq!(sidebar.next_id().as_deref(), Some("a"));
        assert_eq!(sidebar.previous_id().as_deref(), Some("b"));
    }

    #[test]
    fn test_emoji_cursor_stays_on_grid() {
        let mut picker = EmojiPickerState::default();
        picker.move_left();
        picker.move_up();
        assert_eq!(picker.cursor(), 0);

        for _ in 0..10 {
            picker.move_right();
        }
        assert_eq!(picker.cursor(), emoji::COLUMNS - 1);

        for _ in 0..10 {
            picker.move_down();
        }
        assert_eq!(picker.cursor(), emoji::PALETTE.len() - 1);
        assert_eq!(picker.selected(), emoji::PALETTE[15]);
    }
}
