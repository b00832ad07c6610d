//! Top-level frame layout: sidebar, main pane, status bar, overlays.

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::ui::components::{render_sidebar, render_statusbar};
use crate::ui::theme;
use crate::ui::views::chat::render_emoji_picker;
use crate::ui::views::profile::render_profile;
use crate::ui::views::render_chat;
use crate::ui::{App, InputMode};

const SIDEBAR_WIDTH: u16 = 34;

pub fn render(f: &mut Frame, app: &mut App) {
    f.render_widget(
        Block::default().style(Style::default().bg(theme::BG_APP)),
        f.area(),
    );

    let rows = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(f.area());
    let columns =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).split(rows[0]);

    render_sidebar(f, app, columns[0]);
    render_chat(f, app, columns[1]);
    render_statusbar(f, app, rows[1]);

    match app.input_mode {
        InputMode::EmojiPicker => render_emoji_picker(f, app, columns[1]),
        InputMode::Profile => render_profile(f, app, columns[1]),
        _ => {}
    }
}
