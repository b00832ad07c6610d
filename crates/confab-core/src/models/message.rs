use crate::constants::{PREVIEW_ELLIPSIS, REPLY_PREVIEW_MAX_CHARS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Incoming,
    Outgoing,
}

/// Delivery marker shown on outgoing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Sent,
    Delivered,
    Read,
}

/// Denormalized snapshot of a message being replied to.
///
/// Captured when the reply starts, so the banner and the quote block keep
/// rendering even after the original message is deleted; only navigation
/// back to the original by id can miss.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyRef {
    pub message_id: String,
    pub sender: String,
    pub preview: String,
    pub direction: Direction,
}

impl ReplyRef {
    /// Build a reference from a live message. `fallback_sender` fills in for
    /// messages that carry no sender name of their own (typically the
    /// conversation's display name).
    pub fn from_message(message: &Message, fallback_sender: &str) -> Self {
        Self {
            message_id: message.id.clone(),
            sender: message
                .sender
                .clone()
                .unwrap_or_else(|| fallback_sender.to_string()),
            preview: preview_text(&message.text),
            direction: message.direction,
        }
    }
}

/// First [`REPLY_PREVIEW_MAX_CHARS`] characters of `text`, with an ellipsis
/// marker appended when the text is longer.
pub fn preview_text(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(REPLY_PREVIEW_MAX_CHARS).collect();
    if chars.next().is_some() {
        format!("{}{}", head, PREVIEW_ELLIPSIS)
    } else {
        head
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Unique within the owning conversation
    pub id: String,
    pub text: String,
    /// Displayed time label (`HH:MM`)
    pub sent_at: String,
    pub direction: Direction,
    /// Sender display name; incoming messages may omit it and fall back to
    /// the conversation name where one is needed
    pub sender: Option<String>,
    /// Delivery marker, outgoing messages only
    pub status: Option<DeliveryStatus>,
    pub reply_to: Option<ReplyRef>,
}

impl Message {
    pub fn incoming(id: &str, text: &str, sent_at: &str, sender: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            sent_at: sent_at.to_string(),
            direction: Direction::Incoming,
            sender: sender.map(str::to_string),
            status: None,
            reply_to: None,
        }
    }

    pub fn outgoing(id: &str, text: &str, sent_at: &str, status: DeliveryStatus) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            sent_at: sent_at.to_string(),
            direction: Direction::Outgoing,
            sender: None,
            status: Some(status),
            reply_to: None,
        }
    }

    pub fn is_outgoing(&self) -> bool {
        self.direction == Direction::Outgoing
    }

    pub fn is_incoming(&self) -> bool {
        self.direction == Direction::Incoming
    }
}
