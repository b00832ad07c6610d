//! Modal key dispatch: one handler per input mode, early return.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::{App, InputMode};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        InputMode::Normal => handle_normal(app, key),
        InputMode::Compose => handle_compose(app, key),
        InputMode::SidebarFilter => handle_sidebar_filter(app, key),
        InputMode::Search => handle_search(app, key),
        InputMode::EmojiPicker => handle_emoji_picker(app, key),
        InputMode::Profile => handle_profile(app, key),
    }
}

fn handle_normal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('i') | KeyCode::Char('a') => app.input_mode = InputMode::Compose,
        KeyCode::Char('/') => {
            app.search_input.clear();
            app.core.start_search();
            app.input_mode = InputMode::Search;
        }
        KeyCode::Char('f') => {
            app.sidebar.borrow_mut().filter_visible = true;
            app.input_mode = InputMode::SidebarFilter;
        }
        KeyCode::Char('p') => app.input_mode = InputMode::Profile,
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor_down(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(id) = app.cursor_message_id() {
                app.core.toggle_active(&id);
            }
        }
        KeyCode::Char('r') => {
            if let Some(id) = app.cursor_message_id() {
                // focus lands on the composer once the reply deferral fires
                app.core.start_reply_to(&id);
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = app.cursor_message_id() {
                app.core.delete_message(&id, Instant::now());
            }
        }
        // bind the target before selecting: the selection publish reaches
        // the sidebar subscriber, which needs the sidebar cell back
        KeyCode::Tab => {
            let next = app.sidebar.borrow().next_id();
            if let Some(id) = next {
                app.clear_cursor();
                app.core.select_conversation(&id);
            }
        }
        KeyCode::BackTab => {
            let previous = app.sidebar.borrow().previous_id();
            if let Some(id) = previous {
                app.clear_cursor();
                app.core.select_conversation(&id);
            }
        }
        // anywhere that is not a message: close the action bar
        KeyCode::Esc => {
            app.core.clear_active();
            app.clear_cursor();
        }
        _ => {}
    }
}

fn handle_compose(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('e') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.emoji_picker.reset();
        app.input_mode = InputMode::EmojiPicker;
        return;
    }
    match key.code {
        KeyCode::Enter => app.core.send_message(),
        KeyCode::Esc => {
            // Esc closes the reply banner first, the composer second
            if app.core.reply_snapshot().is_replying {
                app.core.cancel_reply();
            } else {
                app.input_mode = InputMode::Normal;
            }
        }
        code => {
            let controller = app.core.controller();
            let mut controller = controller.borrow_mut();
            let composer = controller.composer_mut();
            match code {
                KeyCode::Backspace => composer.delete_before(),
                KeyCode::Delete => composer.delete_at(),
                KeyCode::Left => composer.move_left(),
                KeyCode::Right => composer.move_right(),
                KeyCode::Home => composer.move_to_start(),
                KeyCode::End => composer.move_to_end(),
                KeyCode::Char(c) => composer.insert_char(c),
                _ => {}
            }
        }
    }
}

fn handle_sidebar_filter(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.sidebar.borrow_mut().hide_filter();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            let picked = app.sidebar.borrow().cursor_row().map(|c| c.id.clone());
            if let Some(id) = picked {
                app.clear_cursor();
                app.core.select_conversation(&id);
            }
            app.sidebar.borrow_mut().hide_filter();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Up => app.sidebar.borrow_mut().move_cursor_up(),
        KeyCode::Down => app.sidebar.borrow_mut().move_cursor_down(),
        KeyCode::Left => app.sidebar.borrow_mut().filter.move_cursor_left(),
        KeyCode::Right => app.sidebar.borrow_mut().filter.move_cursor_right(),
        KeyCode::Backspace => {
            let mut sidebar = app.sidebar.borrow_mut();
            sidebar.filter.delete_char();
            sidebar.cursor = 0;
        }
        KeyCode::Char(c) => {
            let mut sidebar = app.sidebar.borrow_mut();
            sidebar.filter.insert_char(c);
            sidebar.cursor = 0;
        }
        _ => {}
    }
}

fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.search_input.clear();
            app.core.stop_search();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter | KeyCode::Down => app.core.next_result(),
        KeyCode::Up | KeyCode::BackTab => app.core.previous_result(),
        KeyCode::Left => app.search_input.move_cursor_left(),
        KeyCode::Right => app.search_input.move_cursor_right(),
        KeyCode::Backspace => {
            app.search_input.delete_char();
            app.core.set_search_query(app.search_input.value());
        }
        KeyCode::Char(c) => {
            app.search_input.insert_char(c);
            app.core.set_search_query(app.search_input.value());
        }
        _ => {}
    }
}

fn handle_emoji_picker(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.input_mode = InputMode::Compose,
        KeyCode::Enter => {
            let symbol = app.emoji_picker.selected();
            app.core.insert_emoji(symbol, Instant::now());
            app.input_mode = InputMode::Compose;
        }
        KeyCode::Left | KeyCode::Char('h') => app.emoji_picker.move_left(),
        KeyCode::Right | KeyCode::Char('l') => app.emoji_picker.move_right(),
        KeyCode::Up | KeyCode::Char('k') => app.emoji_picker.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.emoji_picker.move_down(),
        _ => {}
    }
}

fn handle_profile(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('p')) {
        app.input_mode = InputMode::Normal;
    }
}
