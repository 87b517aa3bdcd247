//! UI Components
//!
//! Reusable Leptos components.

mod items_screen;
mod loading_indicator;
mod screen_header;
mod swipe_row;

pub use items_screen::ItemsScreen;
pub use loading_indicator::LoadingIndicator;
pub use screen_header::ScreenHeader;
pub use swipe_row::SwipeRow;
