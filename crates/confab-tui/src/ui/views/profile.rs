//! Profile card modal for the local user.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::theme;
use crate::ui::App;

pub fn render_profile(f: &mut Frame, app: &App, area: Rect) {
    let directory = app.core.directory();
    let directory = directory.borrow();
    let profile = directory.profile();

    let width = 40u16.min(area.width);
    let height = 7u16.min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
    f.render_widget(Clear, popup);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!(" {} ", profile.avatar), theme::text_primary()),
            Span::styled(profile.name.clone(), theme::modal_title()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" contact    ", theme::text_muted()),
            Span::styled(profile.contact.clone(), theme::text_primary()),
        ]),
        Line::from(vec![
            Span::styled(" registered ", theme::text_muted()),
            Span::styled(profile.registered_at.clone(), theme::text_primary()),
        ]),
        Line::from(Span::styled("              Esc to close", theme::modal_hint())),
    ];

    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border_active())
                .title(Span::styled(" Profile ", theme::modal_title())),
        )
        .style(Style::default().bg(theme::BG_MODAL));
    f.render_widget(card, popup);
}
