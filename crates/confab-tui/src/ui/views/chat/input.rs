//! Composer box at the bottom of the main pane.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme;
use crate::ui::{App, InputMode};

pub(super) fn render_composer(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.input_mode == InputMode::Compose;
    let controller = app.core.controller();
    let controller = controller.borrow();
    let composer = controller.composer();

    let border = if focused {
        theme::border_focused()
    } else {
        theme::border_inactive()
    };
    let content = if composer.text().is_empty() && !focused {
        Span::styled("press i to write a message", theme::input_placeholder())
    } else {
        Span::styled(composer.text().to_string(), theme::input_active())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(" Message ", theme::text_muted()));
    f.render_widget(Paragraph::new(Line::from(content)).block(block), area);

    if focused {
        // cursor column is the display width of the text before it
        let column = composer.text()[..composer.cursor()].width() as u16;
        f.set_cursor_position((area.x + 1 + column, area.y + 1));
    }
}
