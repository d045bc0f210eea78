//! Carousel Controller
//!
//! Cycles focus through a fixed list of images on a repeating timer, with
//! manual override (buttons, dots, arrow keys) and hover pause.
//!
//! # Timer
//!
//! Two states only: running (an interval timer is armed) and paused (none
//! is). Pausing clears the timer; resuming arms a fresh, full-length
//! interval, so no partial tick carries over. Manual navigation never
//! touches the timer.
//!
//! # Transitions
//!
//! The index changes immediately. A [`Crossfade`] is recorded next to it
//! for surfaces to animate; it never delays the state change.

mod metadata;
mod transition;

use std::time::Duration;

use thiserror::Error;

use crate::lifecycle::{Component, Context};
use crate::scheduler::TimerId;

pub use metadata::{MetadataLookup, PhotoMeta};
pub use transition::{Crossfade, DEFAULT_CROSSFADE};

/// Default auto-advance interval
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(4000);

/// Errors constructing a carousel
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    /// No items were given
    #[error("carousel needs at least one image")]
    Empty,
}

/// An image in the carousel
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageItem {
    /// Stable identity (also the metadata key)
    pub id: String,
    /// Asset path of the image
    pub source_path: String,
}

impl ImageItem {
    /// Create an image item
    pub fn new(id: impl Into<String>, source_path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source_path: source_path.into(),
        }
    }
}

/// Mutable carousel state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarouselState {
    /// Focused item, always `< len`
    pub current_index: usize,
    /// Whether the auto-advance timer is stopped
    pub is_paused: bool,
}

/// Timers armed by the carousel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselTimer {
    /// Auto-advance tick
    Advance,
}

/// Keys the carousel responds to while focused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselKey {
    /// Previous image
    Left,
    /// Next image
    Right,
}

/// Whether a key was used by the carousel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Handled; the surface must not apply its default (scrolling)
    Consumed,
    /// Not for the carousel
    Ignored,
}

/// Auto-advancing image carousel
#[derive(Clone, Debug)]
pub struct Carousel {
    items: Vec<ImageItem>,
    state: CarouselState,
    interval: Duration,
    crossfade: Duration,
    metadata: MetadataLookup,
    timer: Option<TimerId>,
    transition: Option<Crossfade>,
    focused: bool,
}

impl Carousel {
    /// Create a carousel over `items` advancing every `interval`
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::Empty`] if `items` is empty.
    pub fn new(items: Vec<ImageItem>, interval: Duration) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }

        Ok(Self {
            items,
            state: CarouselState::default(),
            interval,
            crossfade: DEFAULT_CROSSFADE,
            metadata: MetadataLookup::default(),
            timer: None,
            transition: None,
            focused: false,
        })
    }

    /// Attach the per-item metadata table
    #[must_use]
    pub fn with_metadata(mut self, metadata: MetadataLookup) -> Self {
        self.metadata = metadata;
        self
    }

    /// Override the crossfade length
    #[must_use]
    pub fn with_crossfade(mut self, crossfade: Duration) -> Self {
        self.crossfade = crossfade;
        self
    }

    /// Start paused (before mount)
    #[must_use]
    pub fn paused(mut self) -> Self {
        self.state.is_paused = true;
        self
    }

    /// Current state
    pub fn state(&self) -> CarouselState {
        self.state
    }

    /// Number of items (always at least one)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; construction rejects empty lists
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items, in display order
    pub fn items(&self) -> &[ImageItem] {
        &self.items
    }

    /// Focused item
    pub fn current(&self) -> &ImageItem {
        &self.items[self.state.current_index]
    }

    /// Metadata for the focused item
    pub fn current_meta(&self) -> Option<&PhotoMeta> {
        self.metadata.lookup(&self.current().id)
    }

    /// Metadata for any item
    pub fn meta_for(&self, item: &ImageItem) -> Option<&PhotoMeta> {
        self.metadata.lookup(&item.id)
    }

    /// Auto-advance interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the auto-advance timer is armed
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Whether keyboard focus is on the controls
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Crossfade still in progress at `now`
    pub fn transition(&self, now: Duration) -> Option<&Crossfade> {
        self.transition.as_ref().filter(|fade| !fade.is_complete(now))
    }

    /// Show the next image, wrapping to the first
    pub fn advance_next(&mut self, ctx: &mut Context<'_, CarouselTimer>) {
        let next = (self.state.current_index + 1) % self.items.len();
        self.show(next, ctx);
    }

    /// Show the previous image, wrapping to the last
    pub fn advance_prev(&mut self, ctx: &mut Context<'_, CarouselTimer>) {
        let len = self.items.len();
        let prev = (self.state.current_index + len - 1) % len;
        self.show(prev, ctx);
    }

    /// Show image `index`
    ///
    /// Out-of-range indices are ignored and return `false`.
    pub fn jump_to(&mut self, index: usize, ctx: &mut Context<'_, CarouselTimer>) -> bool {
        if index >= self.items.len() {
            tracing::debug!(index, len = self.items.len(), "Ignoring out-of-range jump");
            return false;
        }
        self.show(index, ctx);
        true
    }

    /// Stop or resume auto-advance
    ///
    /// Resuming always starts a full interval from now.
    pub fn set_paused(&mut self, paused: bool, ctx: &mut Context<'_, CarouselTimer>) {
        if self.state.is_paused == paused {
            return;
        }
        self.state.is_paused = paused;

        if paused {
            if let Some(id) = self.timer.take() {
                ctx.clear_timer(id);
            }
        } else {
            self.arm(ctx);
        }

        tracing::debug!(paused, at_ms = ctx.now().as_millis() as u64, "Carousel pause toggled");
        ctx.mark_dirty();
    }

    /// Pointer entered (`true`) or left (`false`) the carousel
    pub fn set_hovered(&mut self, hovered: bool, ctx: &mut Context<'_, CarouselTimer>) {
        self.set_paused(hovered, ctx);
    }

    /// Give or take keyboard focus
    pub fn set_focused(&mut self, focused: bool, ctx: &mut Context<'_, CarouselTimer>) {
        if self.focused != focused {
            self.focused = focused;
            ctx.mark_dirty();
        }
    }

    /// Arrow-key navigation while focused
    pub fn handle_key(
        &mut self,
        key: CarouselKey,
        ctx: &mut Context<'_, CarouselTimer>,
    ) -> KeyOutcome {
        if !self.focused {
            return KeyOutcome::Ignored;
        }
        match key {
            CarouselKey::Left => self.advance_prev(ctx),
            CarouselKey::Right => self.advance_next(ctx),
        }
        KeyOutcome::Consumed
    }

    fn show(&mut self, index: usize, ctx: &mut Context<'_, CarouselTimer>) {
        let from = self.state.current_index;
        if index == from {
            return;
        }

        self.transition = Some(Crossfade::new(from, index, ctx.now(), self.crossfade));
        self.state.current_index = index;
        ctx.mark_dirty();
    }

    fn arm(&mut self, ctx: &mut Context<'_, CarouselTimer>) {
        if let Some(id) = self.timer.take() {
            ctx.clear_timer(id);
        }
        self.timer = Some(ctx.set_interval(self.interval, CarouselTimer::Advance));
    }
}

impl Component for Carousel {
    type Timer = CarouselTimer;

    fn on_mount(&mut self, ctx: &mut Context<'_, CarouselTimer>) {
        if !self.state.is_paused {
            self.arm(ctx);
        }
    }

    fn on_timer(&mut self, timer: CarouselTimer, ctx: &mut Context<'_, CarouselTimer>) {
        match timer {
            CarouselTimer::Advance if !self.state.is_paused => self.advance_next(ctx),
            CarouselTimer::Advance => {}
        }
    }

    fn on_unmount(&mut self, ctx: &mut Context<'_, CarouselTimer>) {
        if let Some(id) = self.timer.take() {
            ctx.clear_timer(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Mounted;

    fn items(n: usize) -> Vec<ImageItem> {
        (0..n)
            .map(|i| ImageItem::new(format!("MEM-{:02}", i + 1), format!("photos/{i}.jpeg")))
            .collect()
    }

    fn mounted(n: usize) -> Mounted<Carousel> {
        Mounted::mount(Carousel::new(items(n), DEFAULT_INTERVAL).unwrap())
    }

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn test_empty_is_rejected() {
        assert_eq!(
            Carousel::new(Vec::new(), DEFAULT_INTERVAL).unwrap_err(),
            CarouselError::Empty
        );
    }

    #[test]
    fn test_mount_arms_timer() {
        let m = mounted(3);
        assert!(m.component().is_running());
        assert_eq!(m.next_deadline(), Some(secs(4)));
    }

    #[test]
    fn test_mount_paused_arms_nothing() {
        let m = Mounted::mount(Carousel::new(items(3), DEFAULT_INTERVAL).unwrap().paused());
        assert!(!m.component().is_running());
        assert_eq!(m.pending_timers(), 0);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut m = mounted(4);
        m.update(|c, ctx| c.advance_prev(ctx));
        assert_eq!(m.component().state().current_index, 3);
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut m = mounted(3);
        m.update(|c, ctx| c.jump_to(1, ctx));

        assert!(!m.update(|c, ctx| c.jump_to(3, ctx)));
        assert_eq!(m.component().state().current_index, 1);
    }

    #[test]
    fn test_jump_to_current_has_no_transition() {
        let mut m = mounted(3);
        assert!(m.update(|c, ctx| c.jump_to(0, ctx)));
        assert!(m.component().transition(Duration::ZERO).is_none());
        assert!(!m.is_dirty());
    }

    #[test]
    fn test_single_item_never_moves() {
        let mut m = mounted(1);
        m.advance_to(secs(20));
        m.update(|c, ctx| c.advance_prev(ctx));
        assert_eq!(m.component().state().current_index, 0);
    }

    #[test]
    fn test_keys_need_focus() {
        let mut m = mounted(3);
        let outcome = m.update(|c, ctx| c.handle_key(CarouselKey::Right, ctx));
        assert_eq!(outcome, KeyOutcome::Ignored);
        assert_eq!(m.component().state().current_index, 0);

        m.update(|c, ctx| c.set_focused(true, ctx));
        let outcome = m.update(|c, ctx| c.handle_key(CarouselKey::Right, ctx));
        assert_eq!(outcome, KeyOutcome::Consumed);
        assert_eq!(m.component().state().current_index, 1);

        m.update(|c, ctx| c.handle_key(CarouselKey::Left, ctx));
        assert_eq!(m.component().state().current_index, 0);
    }

    #[test]
    fn test_change_starts_crossfade() {
        let mut m = mounted(3);
        m.advance_to(secs(4));

        let fade = *m.component().transition(secs(4)).unwrap();
        assert_eq!((fade.from, fade.to), (0, 1));
        assert_eq!(fade.started_at, secs(4));
        assert!(m.component().transition(secs(5)).is_none());
        assert_eq!(m.component().state().current_index, 1);
    }

    #[test]
    fn test_change_mid_fade_restarts_from_shown_index() {
        let mut m = mounted(3);
        m.advance_to(secs(4));
        m.advance_to(Duration::from_millis(4200));
        m.update(|c, ctx| c.advance_next(ctx));

        let fade = *m.component().transition(Duration::from_millis(4200)).unwrap();
        assert_eq!((fade.from, fade.to), (1, 2));
    }

    #[test]
    fn test_repeated_pause_does_not_restart_interval() {
        let mut m = mounted(3);
        m.advance_to(secs(3));
        m.update(|c, ctx| c.set_paused(false, ctx));
        m.advance_to(secs(4));
        assert_eq!(m.component().state().current_index, 1);
    }

    #[test]
    fn test_hover_pauses() {
        let mut m = mounted(3);
        m.update(|c, ctx| c.set_hovered(true, ctx));
        assert!(m.component().state().is_paused);
        assert!(!m.component().is_running());

        m.update(|c, ctx| c.set_hovered(false, ctx));
        assert!(!m.component().state().is_paused);
        assert!(m.component().is_running());
    }

    #[test]
    fn test_manual_advance_while_paused() {
        let mut m = mounted(3);
        m.update(|c, ctx| c.set_paused(true, ctx));
        m.update(|c, ctx| c.advance_next(ctx));
        m.advance_to(secs(30));
        assert_eq!(m.component().state().current_index, 1);
    }

    #[test]
    fn test_metadata_follows_current_item() {
        let lookup = MetadataLookup::new(vec![
            PhotoMeta::new("MEM-01", "first", "TALL"),
            PhotoMeta::new("MEM-02", "second", "WIDE"),
        ]);
        let carousel = Carousel::new(items(3), DEFAULT_INTERVAL)
            .unwrap()
            .with_metadata(lookup);
        let mut m = Mounted::mount(carousel);

        assert_eq!(m.component().current_meta().unwrap().caption, "first");
        m.update(|c, ctx| c.advance_next(ctx));
        assert_eq!(m.component().current_meta().unwrap().caption, "second");
        m.update(|c, ctx| c.advance_next(ctx));
        assert_eq!(m.component().current_meta().unwrap().caption, "first");
    }

    #[test]
    fn test_unmount_clears_timer() {
        let m = mounted(3);
        let carousel = m.unmount();
        assert!(!carousel.is_running());
    }
}
