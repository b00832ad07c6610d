// Centralized theme - all colors and styles live here

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// App background - pure black for contrast
pub const BG_APP: Color = Color::Rgb(0, 0, 0);

/// Sidebar background - very dark, almost black
pub const BG_SIDEBAR: Color = Color::Rgb(12, 12, 12);

/// Selected item background
pub const BG_SELECTED: Color = Color::Rgb(32, 32, 32);

/// Search-jump highlight background - yellow tint
pub const BG_HIGHLIGHT: Color = Color::Rgb(80, 70, 25);

/// Input field background
pub const BG_INPUT: Color = Color::Rgb(18, 18, 18);

/// Modal background - slightly elevated from pure black
pub const BG_MODAL: Color = Color::Rgb(24, 24, 24);

/// Primary text - off-white for readability
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);

/// Secondary/muted text
pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);

/// Dimmed text for hints, placeholders, deleting messages
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

/// Primary accent - muted blue (focus, read markers, current match)
pub const ACCENT_PRIMARY: Color = Color::Rgb(86, 156, 214);

/// Success/positive - muted green (online dot)
pub const ACCENT_SUCCESS: Color = Color::Rgb(106, 153, 85);

/// Warning - muted amber (unread badges)
pub const ACCENT_WARNING: Color = Color::Rgb(206, 145, 120);

/// Error - muted red (delete hints)
pub const ACCENT_ERROR: Color = Color::Rgb(244, 112, 112);

/// Active/focused border
pub const BORDER_ACTIVE: Color = Color::Rgb(100, 100, 100);

/// Inactive border
pub const BORDER_INACTIVE: Color = Color::Rgb(60, 60, 60);

// =============================================================================
// STYLE FUNCTIONS
// =============================================================================

pub fn text_primary() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn text_dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn text_bold() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn border_active() -> Style {
    Style::default().fg(BORDER_ACTIVE)
}

pub fn border_inactive() -> Style {
    Style::default().fg(BORDER_INACTIVE)
}

pub fn border_focused() -> Style {
    Style::default().fg(ACCENT_PRIMARY)
}

pub fn input_active() -> Style {
    Style::default().fg(TEXT_PRIMARY).bg(BG_INPUT)
}

pub fn input_placeholder() -> Style {
    Style::default().fg(TEXT_DIM).bg(BG_INPUT)
}

pub fn online_dot() -> Style {
    Style::default().fg(ACCENT_SUCCESS)
}

pub fn offline_dot() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn unread_badge() -> Style {
    Style::default()
        .fg(ACCENT_WARNING)
        .add_modifier(Modifier::BOLD)
}

/// Deleting messages fade out while the removal timer runs.
pub fn message_deleting() -> Style {
    Style::default().fg(TEXT_DIM).add_modifier(Modifier::DIM)
}

pub fn message_highlighted() -> Style {
    Style::default().fg(TEXT_PRIMARY).bg(BG_HIGHLIGHT)
}

pub fn reply_quote() -> Style {
    Style::default().fg(TEXT_MUTED).add_modifier(Modifier::ITALIC)
}

pub fn delivery_sent() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn delivery_read() -> Style {
    Style::default().fg(ACCENT_PRIMARY)
}

pub fn modal_title() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn modal_hint() -> Style {
    Style::default().fg(TEXT_MUTED)
}
