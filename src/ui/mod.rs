//! UI-Komponenten: Toolbar, Status-Bar, Karten-Viewport, Popup, Input.

pub mod input;
pub mod map_view;
pub mod popup;
pub mod status;
pub mod toolbar;

pub use input::InputState;
pub use map_view::render_map;
pub use popup::render_popup;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
