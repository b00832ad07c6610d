mod emoji_picker;
mod input;
mod layout;
mod messages;
mod search_bar;

pub use emoji_picker::render_emoji_picker;
pub use layout::render_chat;
