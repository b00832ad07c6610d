//! Message cards for the open thread.
//!
//! Builds one flat list of lines, remembers where each message starts, and
//! resolves the controller's pending scroll request against those
//! positions. A request whose target is no longer rendered is logged and
//! dropped; the view keeps its previous offset.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tracing::warn;
use unicode_width::UnicodeWidthStr;

use confab_core::grouping::should_show_avatar;
use confab_core::models::{DeliveryStatus, Message};
use confab_core::thread::ScrollRequest;

use crate::ui::format::truncate_with_ellipsis;
use crate::ui::theme;
use crate::ui::App;

pub(super) fn render_messages(f: &mut Frame, app: &mut App, area: Rect) {
    let directory = app.core.directory();
    let directory = directory.borrow();
    let controller = app.core.controller();
    let mut controller = controller.borrow_mut();

    let conversation = controller
        .conversation_id()
        .and_then(|id| directory.get(id).cloned());
    let (avatar, conversation_name) = match &conversation {
        Some(c) => (c.avatar.as_str(), c.name.as_str()),
        None => ("", ""),
    };

    let width = area.width as usize;
    let content_width = width.saturating_sub(6).max(8);
    let mut lines: Vec<Line> = Vec::new();
    let mut positions: Vec<(String, usize, usize)> = Vec::new();

    let messages = controller.messages().to_vec();
    for (index, message) in messages.iter().enumerate() {
        let start = lines.len();
        let deleting = controller.is_deleting(&message.id);
        let highlighted = controller.is_highlighted(&message.id);
        let on_cursor = app.cursor == Some(index);

        let base = if deleting {
            theme::message_deleting()
        } else if highlighted {
            theme::message_highlighted()
        } else if on_cursor {
            theme::text_primary().bg(theme::BG_SELECTED)
        } else {
            theme::text_primary()
        };

        if let Some(reference) = &message.reply_to {
            lines.push(quote_line(reference, content_width, base));
        }
        if message.is_outgoing() {
            push_outgoing(&mut lines, message, width, base);
        } else {
            if should_show_avatar(&messages, index) {
                let sender = message.sender.as_deref().unwrap_or(conversation_name);
                lines.push(Line::from(vec![
                    Span::styled(format!(" {} ", avatar), base),
                    Span::styled(sender.to_string(), theme::text_bold().patch(base)),
                    Span::styled(format!("  {}", message.sent_at), theme::text_dim()),
                ]));
            }
            for chunk in wrap_text(&message.text, content_width) {
                lines.push(Line::from(Span::styled(format!("    {}", chunk), base)));
            }
        }
        if controller.should_show_actions(&message.id) {
            lines.push(Line::from(vec![
                Span::styled("    ↩ reply (r)", Style::default().fg(theme::ACCENT_PRIMARY)),
                Span::styled("  ✕ delete (d)", Style::default().fg(theme::ACCENT_ERROR)),
            ]));
        }
        positions.push((message.id.clone(), start, lines.len() - start));
        lines.push(Line::from(""));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(" no messages", theme::text_muted())));
    }

    let total = lines.len();
    let height = area.height as usize;
    let max_offset = total.saturating_sub(height);
    let offset = match controller.take_scroll_request() {
        Some(ScrollRequest::Bottom) => max_offset,
        Some(ScrollRequest::ToMessage(id)) => {
            match positions.iter().find(|(message_id, _, _)| *message_id == id) {
                Some((_, start, len)) => (start + len / 2)
                    .saturating_sub(height / 2)
                    .min(max_offset),
                None => {
                    warn!(message = %id, "scroll target not rendered, keeping offset");
                    app.scroll_offset.min(max_offset)
                }
            }
        }
        None => app.scroll_offset.min(max_offset),
    };
    app.scroll_offset = offset;

    let pane = Paragraph::new(lines)
        .style(Style::default().bg(theme::BG_APP))
        .scroll((offset as u16, 0));
    f.render_widget(pane, area);
}

fn quote_line(
    reference: &confab_core::models::ReplyRef,
    content_width: usize,
    base: Style,
) -> Line<'static> {
    let quoted = format!(
        "▍{}: {}",
        reference.sender,
        truncate_with_ellipsis(&reference.preview, content_width.saturating_sub(reference.sender.chars().count() + 3)),
    );
    Line::from(Span::styled(
        format!("    {}", quoted),
        theme::reply_quote().patch(base),
    ))
}

fn push_outgoing(lines: &mut Vec<Line<'static>>, message: &Message, width: usize, base: Style) {
    let marks = match message.status {
        Some(DeliveryStatus::Sent) => Span::styled(" ✓", theme::delivery_sent()),
        Some(DeliveryStatus::Delivered) => Span::styled(" ✓✓", theme::delivery_sent()),
        Some(DeliveryStatus::Read) => Span::styled(" ✓✓", theme::delivery_read()),
        None => Span::raw(""),
    };
    let content_width = width.saturating_sub(14).max(8);
    let chunks = wrap_text(&message.text, content_width);
    let last = chunks.len().saturating_sub(1);
    for (i, chunk) in chunks.into_iter().enumerate() {
        let mut spans = Vec::new();
        if i == last {
            let tail = format!("{}  {}", chunk, message.sent_at);
            let used = tail.width() + 3 + 1;
            spans.push(Span::raw(" ".repeat(width.saturating_sub(used))));
            spans.push(Span::styled(chunk, base));
            spans.push(Span::styled(
                format!("  {}", message.sent_at),
                theme::text_dim(),
            ));
            spans.push(marks.clone());
        } else {
            spans.push(Span::raw(" ".repeat(width.saturating_sub(chunk.width() + 4))));
            spans.push(Span::styled(chunk, base));
        }
        lines.push(Line::from(spans));
    }
}

/// Char-count wrapping; one chunk per rendered line.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    if max_chars == 0 {
        return vec![String::new()];
    }
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut count = 0;
    for c in text.chars() {
        if count == max_chars {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
        current.push(c);
        count += 1;
    }
    chunks.push(current);
    chunks
}
