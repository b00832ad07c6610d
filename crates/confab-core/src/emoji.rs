//! Emoji palette offered by the composer picker.

/// Picker contents, in display order.
pub const PALETTE: [&str; 16] = [
    "😊", "😒", "😎", "❤️", "🙂", "👍", "😢", "😏", "😭", "💀", "👎", "🤡", "😱", "😵", "😋", "💩",
];

/// Grid width the picker lays the palette out in.
pub const COLUMNS: usize = 4;
