//! Conversation list on the left edge: one two-line card per
//! conversation, plus the filter box when filter mode is active.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::format::{truncate_with_ellipsis, unread_badge};
use crate::ui::theme;
use crate::ui::{App, InputMode};

pub fn render_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let sidebar = app.sidebar.borrow();
    let filter_mode = app.input_mode == InputMode::SidebarFilter;

    let (filter_area, list_area) = if sidebar.filter_visible {
        let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(area);
        (Some(chunks[0]), chunks[1])
    } else {
        (None, area)
    };

    if let Some(filter_area) = filter_area {
        let border = if filter_mode {
            theme::border_focused()
        } else {
            theme::border_inactive()
        };
        let content = if sidebar.filter.is_empty() && !filter_mode {
            Span::styled("filter chats", theme::input_placeholder())
        } else {
            Span::styled(sidebar.filter.value().to_string(), theme::input_active())
        };
        let input = Paragraph::new(Line::from(content))
            .block(Block::default().borders(Borders::ALL).border_style(border));
        f.render_widget(input, filter_area);
        if filter_mode {
            f.set_cursor_position((
                filter_area.x + 1 + sidebar.filter.cursor() as u16,
                filter_area.y + 1,
            ));
        }
    }

    let content_width = (list_area.width as usize).saturating_sub(3);
    let mut lines: Vec<Line> = Vec::new();
    for (row, conversation) in sidebar.visible().iter().enumerate() {
        let is_selected = sidebar.selected_id() == Some(conversation.id.as_str());
        let on_cursor = filter_mode && row == sidebar.cursor;
        let row_bg = if is_selected || on_cursor {
            Style::default().bg(theme::BG_SELECTED)
        } else {
            Style::default().bg(theme::BG_SIDEBAR)
        };

        let dot = if conversation.is_online {
            Span::styled("●", theme::online_dot().patch(row_bg))
        } else {
            Span::styled("○", theme::offline_dot().patch(row_bg))
        };
        let name_width = content_width
            .saturating_sub(conversation.last_message_at.chars().count())
            .saturating_sub(5);
        let mut title = vec![
            Span::styled(format!(" {} ", conversation.avatar), row_bg),
            Span::styled(
                truncate_with_ellipsis(&conversation.name, name_width),
                theme::text_bold().patch(row_bg),
            ),
            Span::styled(" ", row_bg),
            dot,
            Span::styled(
                format!(" {}", conversation.last_message_at),
                theme::text_dim().patch(row_bg),
            ),
        ];
        if let Some(badge) = unread_badge(conversation.unread) {
            title.push(Span::styled(
                format!(" {}", badge),
                theme::unread_badge().patch(row_bg),
            ));
        }
        lines.push(Line::from(title));

        let preview_style = if conversation.unread > 0 {
            theme::text_primary()
        } else {
            theme::text_muted()
        };
        lines.push(Line::from(Span::styled(
            format!(
                "   {}",
                truncate_with_ellipsis(&conversation.last_message, content_width)
            ),
            preview_style.patch(row_bg),
        )));
        lines.push(Line::from(Span::styled(String::new(), row_bg)));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled("no chats", theme::text_muted())));
    }

    let list = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(theme::border_inactive()),
        )
        .style(Style::default().bg(theme::BG_SIDEBAR));
    f.render_widget(list, list_area);
}
