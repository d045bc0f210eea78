//! Widgets drawn into the compositor layers

mod nav_bar;
mod page_view;
mod photo_view;
mod status_bar;

pub use nav_bar::{ist_clock, nav_hit, nav_layout, NavBar};
pub use page_view::{PageView, PageViewState};
pub use photo_view::{frame_area, PhotoView, CLOSE_HINT};
pub use status_bar::StatusBar;
