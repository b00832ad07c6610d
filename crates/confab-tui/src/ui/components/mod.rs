pub mod sidebar;
pub mod statusbar;

pub use sidebar::render_sidebar;
pub use statusbar::render_statusbar;
