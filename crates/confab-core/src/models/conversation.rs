use crate::constants::NO_MESSAGES_PREVIEW;

/// One entry in the chat list.
///
/// `last_message` and `last_message_at` mirror the newest message of the
/// conversation's thread and are maintained by the conversation store on
/// every append and removal.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub id: String,
    pub name: String,
    /// Preview of the newest message, shown in the chat list
    pub last_message: String,
    /// Time label of the newest message; empty while the thread is empty
    pub last_message_at: String,
    pub unread: u32,
    /// Short glyph drawn as the avatar
    pub avatar: String,
    pub is_online: bool,
}

impl Conversation {
    /// A conversation with an empty thread.
    pub fn new(id: &str, name: &str, avatar: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            last_message: NO_MESSAGES_PREVIEW.to_string(),
            last_message_at: String::new(),
            unread: 0,
            avatar: avatar.to_string(),
            is_online: false,
        }
    }

    pub fn online(mut self, is_online: bool) -> Self {
        self.is_online = is_online;
        self
    }

    pub fn unread(mut self, unread: u32) -> Self {
        self.unread = unread;
        self
    }
}
