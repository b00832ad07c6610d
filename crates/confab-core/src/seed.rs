//! Demo data the binary starts from.

use crate::models::{Conversation, DeliveryStatus, Message, UserProfile};

pub fn demo_profile() -> UserProfile {
    UserProfile::new("Alex Morgan", "🦊", "+1 555 0134", "15.01.2023")
}

/// Three conversations with distinct characters: an online contact with a
/// fresh exchange, an offline friend with unread messages from earlier in
/// the morning, and a work chat last touched yesterday.
pub fn demo_conversations() -> Vec<(Conversation, Vec<Message>)> {
    let mut maria = Conversation::new("maria", "Maria", "🌻").online(true);
    let maria_thread = vec![
        Message::incoming("maria_1", "morning! did you see the storm last night?", "09:12", None),
        Message::outgoing("maria_2", "slept right through it 😅", "09:14", DeliveryStatus::Read),
        Message::incoming("maria_3", "of course you did", "09:15", None),
        Message::incoming("maria_4", "coffee at the usual place around noon?", "09:15", None),
        Message::outgoing("maria_5", "sounds good, see you there", "09:20", DeliveryStatus::Delivered),
    ];
    maria.last_message = "sounds good, see you there".to_string();
    maria.last_message_at = "09:20".to_string();

    let mut daniel = Conversation::new("daniel", "Daniel", "🎸").unread(2);
    let daniel_thread = vec![
        Message::outgoing("daniel_1", "found the pedal you wanted, 40 bucks", "08:02", DeliveryStatus::Read),
        Message::incoming("daniel_2", "no way. where??", "08:30", None),
        Message::incoming("daniel_3", "hello? this is urgent guitar business", "08:41", None),
    ];
    daniel.last_message = "hello? this is urgent guitar business".to_string();
    daniel.last_message_at = "08:41".to_string();

    let mut work = Conversation::new("work", "Design Team", "🗂️").unread(1);
    let work_thread = vec![
        Message::incoming("work_1", "standup moved to 10:30 tomorrow", "Yesterday", Some("Priya")),
        Message::outgoing("work_2", "works for me", "Yesterday", DeliveryStatus::Read),
        Message::incoming("work_3", "please have the mockups ready by then", "Yesterday", Some("Priya")),
    ];
    work.last_message = "please have the mockups ready by then".to_string();
    work.last_message_at = "Yesterday".to_string();

    vec![
        (maria, maria_thread),
        (daniel, daniel_thread),
        (work, work_thread),
    ]
}
