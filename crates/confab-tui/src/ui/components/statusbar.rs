//! Bottom bar with the key hints for the current input mode.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme;
use crate::ui::{App, InputMode};

pub fn render_statusbar(f: &mut Frame, app: &App, area: Rect) {
    let hints: &[(&str, &str)] = match app.input_mode {
        InputMode::Normal => &[
            ("i", "write"),
            ("↑↓", "focus msg"),
            ("r", "reply"),
            ("d", "delete"),
            ("/", "search"),
            ("f", "filter"),
            ("Tab", "next chat"),
            ("p", "profile"),
            ("q", "quit"),
        ],
        InputMode::Compose => &[
            ("Enter", "send"),
            ("Ctrl-e", "emoji"),
            ("Esc", "back"),
        ],
        InputMode::SidebarFilter => &[("↑↓", "move"), ("Enter", "open"), ("Esc", "close")],
        InputMode::Search => &[
            ("Enter/↓", "next"),
            ("↑", "previous"),
            ("Esc", "close"),
        ],
        InputMode::EmojiPicker => &[("←↑↓→", "move"), ("Enter", "insert"), ("Esc", "close")],
        InputMode::Profile => &[("Esc", "close")],
    };

    let mut spans = Vec::new();
    if app.pending_quit {
        spans.push(Span::styled(
            " Ctrl-C again to quit ",
            Style::default().fg(theme::ACCENT_WARNING),
        ));
    }
    for (key, action) in hints {
        spans.push(Span::styled(format!(" {} ", key), theme::text_bold()));
        spans.push(Span::styled(format!("{} ", action), theme::text_muted()));
    }

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::BG_SIDEBAR));
    f.render_widget(bar, area);
}
