//! Folio Core - Headless Widgets for sysfolio
//!
//! The time-driven parts of the portfolio page (the boot terminal that types
//! itself out, the photo carousel, the copy button and the uptime counters)
//! as plain state machines over a virtual clock. Nothing here draws; a
//! surface mounts the widgets, feeds them elapsed time and input, and renders
//! whatever state they expose.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Surfaces                               │
//! │   ┌──────────────────┐        ┌───────────────────────────┐   │
//! │   │  sysfolio (TUI)  │        │  tests / headless drivers │   │
//! │   │    (ratatui)     │        │                           │   │
//! │   └────────┬─────────┘        └─────────────┬─────────────┘   │
//! │            │  advance_to(elapsed) / update(input)             │
//! └────────────┼────────────────────────────────┼─────────────────┘
//!              │                                │
//! ┌────────────┼────────────────────────────────┼─────────────────┐
//! │            ▼          FOLIO CORE            ▼                 │
//! │   ┌──────────────────────────────────────────────────────┐    │
//! │   │  Mounted<C>  (lifecycle + per-instance Scheduler)     │    │
//! │   └──────────────────────────────────────────────────────┘    │
//! │   ┌────────────┐ ┌──────────┐ ┌──────────────┐ ┌─────────┐    │
//! │   │ Typewriter │ │ Carousel │ │ CopyFeedback │ │ Uptime  │    │
//! │   └────────────┘ └──────────┘ └──────────────┘ └─────────┘    │
//! │   content (static page data) · config (TOML/env/CLI)          │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use std::time::Duration;
//! use folio_core::{content, Mounted, Typewriter};
//!
//! let mut terminal = Mounted::mount(Typewriter::new(content::hero_terminal_lines()));
//! terminal.advance_to(Duration::from_secs(5));
//! assert!(terminal.component().is_complete());
//! let _ = terminal.unmount();
//! ```
//!
//! # Module Overview
//!
//! - [`scheduler`]: Virtual-time timer queue (timeouts and intervals)
//! - [`lifecycle`]: `Component` trait, `Context` and `Mounted` instances
//! - [`typewriter`]: Staggered character-by-character text reveal
//! - [`carousel`]: Auto-advancing image carousel with pause, focus and crossfade
//! - [`shuffle`]: Fisher–Yates over an injectable random source
//! - [`feedback`]: Copy-to-clipboard confirmation
//! - [`uptime`]: Live "Xd Yh Zm" counters
//! - [`content`]: Static page data
//! - [`config`]: TOML configuration with env and CLI overrides
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod carousel;
pub mod config;
pub mod content;
pub mod feedback;
pub mod lifecycle;
pub mod scheduler;
pub mod shuffle;
pub mod typewriter;
pub mod uptime;

// Re-exports for convenience
pub use carousel::{
    Carousel, CarouselError, CarouselKey, CarouselState, CarouselTimer, Crossfade, ImageItem,
    KeyOutcome, MetadataLookup, PhotoMeta,
};
pub use config::{ConfigError, ConfigOverrides, ConfigSource, FolioConfig};
pub use feedback::{Clipboard, CopyFeedback, NullClipboard};
pub use lifecycle::{Component, Context, Mounted};
pub use scheduler::{Scheduler, TimerId};
pub use shuffle::shuffle;
pub use typewriter::{LineStyle, LineView, TextLine, Typewriter};
pub use uptime::{format_uptime, UptimeCounter};
