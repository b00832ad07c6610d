pub mod conversation;
pub mod message;
pub mod profile;

pub use conversation::Conversation;
pub use message::{preview_text, DeliveryStatus, Direction, Message, ReplyRef};
pub use profile::UserProfile;
