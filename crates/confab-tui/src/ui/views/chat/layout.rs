//! Vertical layout of the main pane: header, search bar, messages, reply
//! banner, composer.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::format::truncate_with_ellipsis;
use crate::ui::theme;
use crate::ui::App;

use super::input::render_composer;
use super::messages::render_messages;
use super::search_bar::render_search_bar;

pub fn render_chat(f: &mut Frame, app: &mut App, area: Rect) {
    let searching = app.core.is_searching();
    let reply_state = app.core.reply_snapshot();

    let mut constraints = vec![Constraint::Length(2)];
    if searching {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(1));
    if reply_state.is_replying {
        constraints.push(Constraint::Length(2));
    }
    constraints.push(Constraint::Length(3));
    let chunks = Layout::vertical(constraints).split(area);

    let mut next = 0;
    let mut take = || {
        let chunk = chunks[next];
        next += 1;
        chunk
    };

    render_header(f, app, take());
    if searching {
        render_search_bar(f, app, take());
    }
    render_messages(f, app, take());
    if reply_state.is_replying {
        render_reply_banner(f, app, take());
    }
    render_composer(f, app, take());
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let directory = app.core.directory();
    let directory = directory.borrow();
    let conversation = app
        .core
        .controller()
        .borrow()
        .conversation_id()
        .and_then(|id| directory.get(id).cloned());

    let lines = match conversation {
        Some(conversation) => {
            let (dot, presence, style) = if conversation.is_online {
                ("●", "online", theme::online_dot())
            } else {
                ("○", "offline", theme::offline_dot())
            };
            vec![
                Line::from(vec![
                    Span::styled(format!(" {} ", conversation.avatar), theme::text_primary()),
                    Span::styled(conversation.name.clone(), theme::text_bold()),
                ]),
                Line::from(vec![
                    Span::styled(format!("   {} ", dot), style),
                    Span::styled(presence, theme::text_muted()),
                ]),
            ]
        }
        None => vec![Line::from(Span::styled(
            " no conversation selected",
            theme::text_muted(),
        ))],
    };

    f.render_widget(
        Paragraph::new(lines).style(Style::default().bg(theme::BG_APP)),
        area,
    );
}

fn render_reply_banner(f: &mut Frame, app: &App, area: Rect) {
    let state = app.core.reply_snapshot();
    let Some(reference) = state.reply_to else {
        return;
    };
    let width = (area.width as usize).saturating_sub(6);
    let lines = vec![
        Line::from(vec![
            Span::styled(" ↩ Replying to ", Style::default().fg(theme::ACCENT_PRIMARY)),
            Span::styled(reference.sender.clone(), theme::text_bold()),
            Span::styled("  Esc to cancel", theme::text_dim()),
        ]),
        Line::from(Span::styled(
            format!("   {}", truncate_with_ellipsis(&reference.preview, width)),
            theme::reply_quote(),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines).style(Style::default().bg(theme::BG_INPUT)),
        area,
    );
}
