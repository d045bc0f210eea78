//! sysfolio TUI - Terminal rendition of the portfolio page
//!
//! This crate mounts the headless `folio-core` widgets and draws them as a
//! full-screen scrolling page.
//!
//! # Architecture
//!
//! - **App**: Event loop; advances the widgets' virtual time to the wall clock
//! - **Compositor**: Layered rendering (nav bar, page, status bar, photo overlay)
//! - **Page**: Lays the sections out as styled lines plus click targets
//! - **Widgets**: Page view, nav bar, status bar, photo view
//! - **Clipboard**: `arboard` behind the core's `Clipboard` trait

pub mod app;
pub mod clipboard;
pub mod compositor;
pub mod page;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use clipboard::SystemClipboard;
