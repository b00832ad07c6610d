//! Emoji palette overlay, a 4x4 grid centered over the main pane.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use confab_core::emoji;

use crate::ui::theme;
use crate::ui::App;

pub fn render_emoji_picker(f: &mut Frame, app: &App, area: Rect) {
    let rows = emoji::PALETTE.len() / emoji::COLUMNS;
    let width = (emoji::COLUMNS * 4 + 2) as u16;
    let height = (rows + 2) as u16;
    let popup = centered(area, width, height);
    f.render_widget(Clear, popup);

    let cursor = app.emoji_picker.cursor();
    let mut lines = Vec::new();
    for row in 0..rows {
        let mut spans = Vec::new();
        for column in 0..emoji::COLUMNS {
            let index = row * emoji::COLUMNS + column;
            let style = if index == cursor {
                Style::default().bg(theme::BG_SELECTED)
            } else {
                Style::default().bg(theme::BG_MODAL)
            };
            spans.push(Span::styled(format!(" {} ", emoji::PALETTE[index]), style));
        }
        lines.push(Line::from(spans));
    }

    let grid = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border_active())
                .title(Span::styled(" Emoji ", theme::modal_title())),
        )
        .style(Style::default().bg(theme::BG_MODAL));
    f.render_widget(grid, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
