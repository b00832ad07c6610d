pub mod app;
pub mod components;
pub mod format;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod views;

pub use app::{App, InputMode};
pub use terminal::{init as init_terminal, restore as restore_terminal, Tui};
