//! In-thread search bar with the "i of n" match position readout.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;
use crate::ui::{App, InputMode};

pub(super) fn render_search_bar(f: &mut Frame, app: &App, area: Rect) {
    let state = app.core.search_snapshot();
    let focused = app.input_mode == InputMode::Search;

    let counter = match state.current {
        Some(index) => format!(
            " {} of {} · {} matches ",
            index + 1,
            state.results.len(),
            state.total_matches
        ),
        None if state.query.is_empty() => String::new(),
        None => " no matches ".to_string(),
    };
    let counter_width = counter.chars().count() as u16;
    let chunks =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(counter_width)]).split(area);

    let border = if focused {
        theme::border_focused()
    } else {
        theme::border_inactive()
    };
    let content = if app.search_input.is_empty() && !focused {
        Span::styled("search in conversation", theme::input_placeholder())
    } else {
        Span::styled(app.search_input.value().to_string(), theme::input_active())
    };
    let input = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(" Search ", theme::text_muted())),
    );
    f.render_widget(input, chunks[0]);

    let style = if state.current.is_some() {
        theme::text_primary()
    } else {
        theme::text_muted()
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(counter, style))),
        chunks[1],
    );

    if focused {
        f.set_cursor_position((
            chunks[0].x + 1 + app.search_input.cursor() as u16,
            chunks[0].y + 1,
        ));
    }
}
