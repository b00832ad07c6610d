//! Application-wide constants
//!
//! Centralized location for magic strings and timing values shared
//! across the stores and the thread controller.

use std::time::Duration;

/// Preview shown on a conversation whose thread holds no messages
pub const NO_MESSAGES_PREVIEW: &str = "No messages";

/// Maximum reply-preview length in characters
pub const REPLY_PREVIEW_MAX_CHARS: usize = 100;

/// Marker appended to a truncated reply preview
pub const PREVIEW_ELLIPSIS: &str = "...";

/// Display format for message time labels; the label doubles as the
/// avatar time-group key, compared as an exact string
pub const TIME_LABEL_FORMAT: &str = "%H:%M";

// Interaction timing
/// Gap between marking a message deleting and actually removing it,
/// so the exit animation has time to play
pub const DELETE_ANIMATION_DELAY: Duration = Duration::from_millis(300);

/// How long a search-jump highlight stays on a message
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(2000);

/// Delay before focus moves back to the composer after the reply banner
/// or the emoji picker opens
pub const COMPOSER_FOCUS_DELAY: Duration = Duration::from_millis(100);
