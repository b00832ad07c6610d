//! Avatar grouping for rendered message runs.

use crate::models::Message;

/// Whether the message at `index` opens a new visual group and gets an
/// avatar. Outgoing messages never do. An incoming message does when it is
/// the first in the thread, follows an outgoing message, comes from a
/// different sender than its predecessor, or carries a different time label.
///
/// Time labels are compared as strings: two messages a minute apart group
/// separately, two in the same minute group together.
pub fn should_show_avatar(messages: &[Message], index: usize) -> bool {
    let Some(message) = messages.get(index) else {
        return false;
    };
    if message.is_outgoing() {
        return false;
    }
    let Some(previous) = index.checked_sub(1).and_then(|i| messages.get(i)) else {
        return true;
    };
    previous.is_outgoing()
        || previous.sender != message.sender
        || previous.sent_at != message.sent_at
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeliveryStatus, Message};

    fn incoming(id: &str, sender: &str, sent_at: &str) -> Message {
        Message::incoming(id, "hi", sent_at, Some(sender))
    }

    fn outgoing(id: &str, sent_at: &str) -> Message {
        Message::outgoing(id, "hi", sent_at, DeliveryStatus::Sent)
    }

    #[test]
    fn test_outgoing_never_shows_avatar() {
        let thread = vec![outgoing("1", "10:00"), outgoing("2", "10:00")];
        assert!(!should_show_avatar(&thread, 0));
        assert!(!should_show_avatar(&thread, 1));
    }

    #[test]
    fn test_first_incoming_shows_avatar() {
        let thread = vec![incoming("1", "ann", "10:00")];
        assert!(should_show_avatar(&thread, 0));
    }

    #[test]
    fn test_same_sender_same_minute_groups() {
        let thread = vec![incoming("1", "ann", "10:00"), incoming("2", "ann", "10:00")];
        assert!(should_show_avatar(&thread, 0));
        assert!(!should_show_avatar(&thread, 1));
    }

    #[test]
    fn test_minute_change_breaks_group() {
        let thread = vec![incoming("1", "ann", "10:00"), incoming("2", "ann", "10:01")];
        assert!(should_show_avatar(&thread, 1));
    }

    #[test]
    fn test_sender_change_breaks_group() {
        let thread = vec![incoming("1", "ann", "10:00"), incoming("2", "bob", "10:00")];
        assert!(should_show_avatar(&thread, 1));
    }

    #[test]
    fn test_incoming_after_outgoing_shows_avatar() {
        let thread = vec![
            incoming("1", "ann", "10:00"),
            outgoing("2", "10:00"),
            incoming("3", "ann", "10:00"),
        ];
        assert!(should_show_avatar(&thread, 2));
    }

    #[test]
    fn test_out_of_range_index() {
        let thread = vec![incoming("1", "ann", "10:00")];
        assert!(!should_show_avatar(&thread, 5));
    }
}
