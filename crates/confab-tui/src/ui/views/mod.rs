pub mod chat;
pub mod profile;

pub use chat::render_chat;
