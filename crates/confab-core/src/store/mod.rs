pub mod conversations;
pub mod pubsub;
pub mod reply;
pub mod search;
pub mod selection;

pub use conversations::ConversationStore;
pub use pubsub::{Publisher, Subscriber, SubscriberId};
pub use reply::{ReplyState, ReplyStore};
pub use search::{SearchResult, SearchState, SearchStore};
pub use selection::{SelectionState, SelectionStore};
