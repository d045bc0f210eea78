//! Main Application
//!
//! The App owns the mounted widgets and the compositor:
//! - Event loop (keyboard, mouse, resize, frame tick)
//! - Virtual time: every widget is advanced to the wall-clock time since
//!   start before input is applied and before each frame is drawn
//! - Layout: nav bar, scrolling page, status bar, and a photo overlay
//!   opened from the gallery
//!
//! Everything except [`App::run`] is synchronous and takes time as an
//! argument, so tests drive the app without a terminal.

use std::io;
use std::time::{Duration, Instant};

use chrono::{DateTime, TimeDelta, Utc};
use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use folio_core::content::{self, Section, CONTACT_EMAIL, PROJECTS, SERVICES};
use folio_core::{
    shuffle, Carousel, CarouselKey, Clipboard, CopyFeedback, FolioConfig, ImageItem, KeyOutcome,
    Mounted, Typewriter, UptimeCounter,
};
use futures::StreamExt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{StatefulWidget, Widget};
use ratatui::Terminal;
use tokio::time::MissedTickBehavior;

use crate::clipboard::SystemClipboard;
use crate::compositor::{Compositor, LayerId};
use crate::page::{Document, PageSnapshot, Target};
use crate::widgets::{nav_hit, NavBar, PageView, PageViewState, PhotoView, StatusBar};

/// Lines moved per wheel notch
const WHEEL_STEP: isize = 3;

/// Main application state
pub struct App {
    // === Core State ===
    /// Is the app still running?
    running: bool,
    /// Wall clock when the widgets were mounted
    started_at: DateTime<Utc>,
    /// Virtual time since mount
    now: Duration,
    /// Time between frames
    frame_duration: Duration,

    // === Mounted widgets ===
    terminal_lines: Mounted<Typewriter>,
    gallery: Mounted<Carousel>,
    copy: Mounted<CopyFeedback>,
    /// One slot per entry of `SERVICES`; archived roles have no counter
    uptimes: Vec<Option<Mounted<UptimeCounter>>>,
    clipboard: Box<dyn Clipboard>,

    // === UI Components ===
    /// The layered compositor
    compositor: Compositor,
    /// Layer assignments
    layers: AppLayers,
    /// Last laid-out page
    document: Document,
    /// Page needs laying out before the next frame
    needs_layout: bool,
    /// A crossfade was running last frame
    was_fading: bool,

    // === Input State ===
    scroll: PageViewState,
    /// Section chosen with Tab/1-7 or a nav click, until the next scroll
    jumped: Option<Section>,
    /// Project cards with their module list open
    expanded: Vec<bool>,
    /// Pointer is over the gallery
    hovering_gallery: bool,
    /// Gallery position shown full-screen, if any
    expanded_photo: Option<usize>,
}

/// Layer IDs for UI regions
struct AppLayers {
    nav: LayerId,
    page: LayerId,
    status: LayerId,
    overlay: LayerId,
}

impl App {
    /// Mount every widget for a screen of `area`, with `started_at` as the
    /// wall clock at mount
    ///
    /// # Errors
    ///
    /// Fails if the gallery has nothing to show.
    pub fn new(config: &FolioConfig, area: Rect, started_at: DateTime<Utc>) -> anyhow::Result<Self> {
        let mut compositor = Compositor::new(area);
        let (nav_area, page_area, status_area) = Self::regions(area);
        let layers = AppLayers {
            page: compositor.create_layer(page_area, 0),
            nav: compositor.create_layer(nav_area, 10),
            status: compositor.create_layer(status_area, 10),
            overlay: compositor.create_layer(area, 50),
        };
        compositor.set_visible(layers.overlay, false);

        let terminal_lines = Mounted::mount(
            Typewriter::new(content::hero_terminal_lines()).with_char_interval(config.char_interval),
        );

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let photos = shuffle(&content::photos(), &mut rng);
        let carousel = Carousel::new(photos, config.carousel_interval)?
            .with_metadata(content::photo_metadata())
            .with_crossfade(config.crossfade);
        let mut gallery = Mounted::mount(carousel);
        gallery.on_state_change(|carousel| {
            let state = carousel.state();
            tracing::debug!(
                index = state.current_index,
                paused = state.is_paused,
                id = %carousel.current().id,
                "Gallery state changed"
            );
        });

        let uptimes = SERVICES
            .iter()
            .map(|service| {
                let started = service.started_at().filter(|_| service.is_active())?;
                Some(Mounted::mount(UptimeCounter::new(started, started_at)))
            })
            .collect();

        tracing::info!(
            seed = ?config.seed,
            interval_ms = config.carousel_interval.as_millis() as u64,
            fps = config.fps,
            "Widgets mounted"
        );

        let mut app = Self {
            running: true,
            started_at,
            now: Duration::ZERO,
            frame_duration: config.frame_duration(),
            terminal_lines,
            gallery,
            copy: Mounted::mount(CopyFeedback::new()),
            uptimes,
            clipboard: Box::new(SystemClipboard::new()),
            compositor,
            layers,
            document: Document::default(),
            needs_layout: true,
            was_fading: false,
            scroll: PageViewState {
                viewport: usize::from(page_area.height),
                ..PageViewState::default()
            },
            jumped: None,
            expanded: vec![false; PROJECTS.len()],
            hovering_gallery: false,
            expanded_photo: None,
        };
        app.relayout();
        Ok(app)
    }

    /// Replace the clipboard the copy button writes to
    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let start = Instant::now();

        // Create async event stream for non-blocking terminal events
        let mut event_stream = EventStream::new();

        // Frame clock; late ticks are dropped rather than bunched up
        let mut frames = tokio::time::interval(self.frame_duration);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        while self.running {
            tokio::select! {
                biased;

                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            self.tick(start.elapsed());
                            self.handle_event(&event);
                        }
                        Some(Err(e)) => tracing::warn!(error = %e, "Terminal event error"),
                        None => self.running = false,
                    }
                }

                _ = frames.tick() => {
                    self.tick(start.elapsed());
                    self.draw(terminal)?;
                }
            }
        }

        Ok(())
    }

    /// Unmount every widget, cancelling their timers
    pub fn shutdown(self) {
        self.terminal_lines.unmount();
        self.gallery.unmount();
        self.copy.unmount();
        for counter in self.uptimes.into_iter().flatten() {
            counter.unmount();
        }
        tracing::debug!("Widgets unmounted");
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Is the app still running?
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Virtual time since mount
    pub fn now(&self) -> Duration {
        self.now
    }

    /// The laid-out page
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Page scroll state
    pub fn scroll(&self) -> PageViewState {
        self.scroll
    }

    /// The gallery carousel
    pub fn gallery(&self) -> &Carousel {
        self.gallery.component()
    }

    /// Hero boot terminal
    pub fn boot_terminal(&self) -> &Typewriter {
        self.terminal_lines.component()
    }

    /// Copy button label
    pub fn copy_label(&self) -> &'static str {
        self.copy.component().label()
    }

    /// Whether project card `index` has its module list open
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    /// Photo open in the full-screen view
    pub fn expanded_photo(&self) -> Option<&ImageItem> {
        self.expanded_photo
            .and_then(|position| self.gallery.component().items().get(position))
    }

    /// Section the reader is looking at
    pub fn active_section(&self) -> Section {
        self.jumped
            .unwrap_or_else(|| self.document.section_at(self.reading_row()))
    }

    /// Project card under keyboard focus
    pub fn focused_project(&self) -> Option<usize> {
        if self.active_section() != Section::Projects {
            return None;
        }
        Some(self.document.project_at(self.reading_row()).unwrap_or(0))
    }

    /// Wall clock now
    pub fn wall_clock(&self) -> DateTime<Utc> {
        self.started_at + TimeDelta::from_std(self.now).unwrap_or(TimeDelta::zero())
    }

    // ------------------------------------------------------------------------
    // Time
    // ------------------------------------------------------------------------

    /// Advance every widget to `elapsed` since mount
    pub fn tick(&mut self, elapsed: Duration) {
        self.now = elapsed;
        self.terminal_lines.advance_to(elapsed);
        self.gallery.advance_to(elapsed);
        self.copy.advance_to(elapsed);
        for counter in self.uptimes.iter_mut().flatten() {
            counter.advance_to(elapsed);
        }
    }

    // ------------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------------

    /// Apply a terminal event at the current virtual time
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            // Only handle Press events (not Release or Repeat)
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            Event::Resize(w, h) => self.handle_resize(*w, *h),
            _ => {}
        }
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyEvent) {
        if self.expanded_photo.is_some() {
            self.handle_photo_key(key);
            return;
        }

        match key.code {
            // Quit
            KeyCode::Esc | KeyCode::Char('q') => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }

            KeyCode::Char('c') => self.copy_email(),

            // Scrolling
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-self.page_step()),
            KeyCode::PageDown => self.scroll_by(self.page_step()),
            KeyCode::Home => self.scroll_to_row(0),
            KeyCode::End => self.scroll_to_row(self.scroll.max_scroll()),

            // Sections
            KeyCode::Tab => self.jump_to(self.active_section().next()),
            KeyCode::BackTab => self.jump_to(self.active_section().prev()),
            KeyCode::Char(c @ '1'..='7') => {
                let index = c as usize - '1' as usize;
                if let Some(section) = Section::from_index(index) {
                    self.jump_to(section);
                }
            }

            // Gallery
            KeyCode::Left => {
                self.carousel_key(CarouselKey::Left);
            }
            KeyCode::Right => {
                self.carousel_key(CarouselKey::Right);
            }
            KeyCode::Char(' ') => {
                if self.gallery.component().is_focused() {
                    self.toggle_pause();
                } else {
                    self.scroll_by(self.page_step());
                }
            }

            // Projects, or the photo in focus
            KeyCode::Enter => {
                if self.gallery.component().is_focused() {
                    self.open_photo(self.gallery.component().state().current_index);
                } else if let Some(index) = self.focused_project() {
                    self.toggle_project(index);
                }
            }

            _ => {}
        }
    }

    /// Keys while the photo view is open: it holds the keyboard until closed
    fn handle_photo_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.close_photo(),
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            _ => {}
        }
    }

    /// Handle mouse input
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.expanded_photo.is_some() {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                self.close_photo();
            }
            return;
        }

        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_STEP),
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP),
            MouseEventKind::Moved => {
                let over = matches!(
                    self.page_target(mouse.column, mouse.row),
                    Some(
                        Target::CarouselFrame
                            | Target::CarouselPrev
                            | Target::CarouselNext
                            | Target::CarouselDot(_)
                    )
                );
                self.set_gallery_hover(over);
            }
            MouseEventKind::Down(MouseButton::Left) => self.click(mouse.column, mouse.row),
            _ => {}
        }
    }

    /// Handle terminal resize
    fn handle_resize(&mut self, width: u16, height: u16) {
        let area = Rect::new(0, 0, width, height);
        self.compositor.resize(area);

        let (nav, page, status) = Self::regions(area);
        self.compositor.set_bounds(self.layers.nav, nav);
        self.compositor.set_bounds(self.layers.page, page);
        self.compositor.set_bounds(self.layers.status, status);
        self.compositor.set_bounds(self.layers.overlay, area);

        self.scroll.viewport = usize::from(page.height);
        self.relayout();
    }

    fn click(&mut self, x: u16, y: u16) {
        let Some(layer_id) = self.compositor.layer_at(x, y) else {
            return;
        };

        if layer_id == self.layers.nav {
            let width = self.compositor.area().width;
            if let Some(section) = nav_hit(width, x) {
                self.jump_to(section);
            }
            return;
        }

        match self.page_target(x, y) {
            Some(Target::CarouselPrev) => self.gallery.update(|c, ctx| c.advance_prev(ctx)),
            Some(Target::CarouselNext) => self.gallery.update(|c, ctx| c.advance_next(ctx)),
            Some(Target::CarouselDot(index)) => {
                self.gallery.update(|c, ctx| c.jump_to(index, ctx));
            }
            Some(Target::CopyEmail) => self.copy_email(),
            Some(Target::Project(index)) => self.toggle_project(index),
            Some(Target::CarouselFrame) => {
                self.open_photo(self.gallery.component().state().current_index);
            }
            None => {}
        }
        self.needs_layout = true;
    }

    /// Page target under a screen cell
    fn page_target(&self, x: u16, y: u16) -> Option<Target> {
        let layer_id = self.compositor.layer_at(x, y)?;
        if layer_id != self.layers.page {
            return None;
        }
        let (lx, ly) = self.compositor.layer(layer_id)?.to_local(x, y)?;
        self.document.hit(self.scroll.scroll_offset + usize::from(ly), lx)
    }

    // ------------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------------

    fn scroll_by(&mut self, delta: isize) {
        self.jumped = None;
        self.scroll.scroll(delta);
        self.sync_gallery_focus();
    }

    fn scroll_to_row(&mut self, row: usize) {
        self.jumped = None;
        self.scroll.scroll_to(row);
        self.sync_gallery_focus();
    }

    fn jump_to(&mut self, section: Section) {
        self.scroll.scroll_to(self.document.anchor(section));
        self.jumped = Some(section);
        tracing::debug!(section = section.title(), row = self.scroll.scroll_offset, "Jumped to section");
        self.sync_gallery_focus();
    }

    fn carousel_key(&mut self, key: CarouselKey) -> KeyOutcome {
        let outcome = self.gallery.update(|c, ctx| c.handle_key(key, ctx));
        if outcome == KeyOutcome::Consumed {
            self.needs_layout = true;
        }
        outcome
    }

    fn toggle_pause(&mut self) {
        self.gallery.update(|c, ctx| {
            let paused = c.state().is_paused;
            c.set_paused(!paused, ctx);
        });
    }

    fn set_gallery_hover(&mut self, hovering: bool) {
        if self.hovering_gallery != hovering {
            self.hovering_gallery = hovering;
            self.gallery.update(|c, ctx| c.set_hovered(hovering, ctx));
        }
    }

    fn copy_email(&mut self) {
        let clipboard = self.clipboard.as_mut();
        self.copy.update(|c, ctx| c.copy(clipboard, CONTACT_EMAIL, ctx));
    }

    fn toggle_project(&mut self, index: usize) {
        if let Some(open) = self.expanded.get_mut(index) {
            *open = !*open;
            tracing::debug!(project = PROJECTS[index].id, expanded = *open, "Project toggled");
            self.needs_layout = true;
        }
    }

    fn open_photo(&mut self, position: usize) {
        self.expanded_photo = Some(position);
        self.compositor.set_visible(self.layers.overlay, true);
        self.set_gallery_hover(false);
        tracing::debug!(position, "Photo opened");
    }

    fn close_photo(&mut self) {
        if self.expanded_photo.take().is_some() {
            self.compositor.set_visible(self.layers.overlay, false);
            tracing::debug!("Photo closed");
        }
    }

    fn sync_gallery_focus(&mut self) {
        let focused = self.active_section() == Section::Human;
        self.gallery.update(|c, ctx| c.set_focused(focused, ctx));
        self.needs_layout = true;
    }

    // ------------------------------------------------------------------------
    // Layout and rendering
    // ------------------------------------------------------------------------

    /// Nav bar, page and status bar regions for a screen
    fn regions(area: Rect) -> (Rect, Rect, Rect) {
        let nav = Rect::new(area.x, area.y, area.width, area.height.min(1));
        let page_height = area.height.saturating_sub(2);
        let page = Rect::new(area.x, area.y + nav.height, area.width, page_height);
        let status = Rect::new(
            area.x,
            area.y + area.height.saturating_sub(1),
            area.width,
            u16::from(area.height >= 2),
        );
        (nav, page, status)
    }

    /// Row the reader's eye is on: a quarter of the way down the viewport
    fn reading_row(&self) -> usize {
        let row = self.scroll.scroll_offset + self.scroll.viewport / 4;
        row.min(self.document.len().saturating_sub(1))
    }

    fn page_step(&self) -> isize {
        isize::try_from(self.scroll.viewport.saturating_sub(1).max(1)).unwrap_or(1)
    }

    /// Rebuild the page document from the widgets' current state
    fn relayout(&mut self) {
        let width = self
            .compositor
            .layer(self.layers.page)
            .map_or(0, |layer| layer.bounds.width);

        let uptimes: Vec<Option<&str>> = self
            .uptimes
            .iter()
            .map(|slot| slot.as_ref().map(|counter| counter.component().text()))
            .collect();
        let copy = self.copy.component();
        let snapshot = PageSnapshot {
            width,
            now: self.now,
            terminal: self.terminal_lines.component(),
            gallery: self.gallery.component(),
            copy_label: copy.label(),
            copied: copy.is_copied(),
            uptimes,
            expanded: &self.expanded,
            focused_project: self.focused_project(),
        };
        let document = Document::build(&snapshot);

        self.document = document;
        self.scroll.total_lines = self.document.len();
        self.scroll.scroll_offset = self.scroll.scroll_offset.min(self.scroll.max_scroll());
        self.needs_layout = false;
    }

    /// Lay out (if anything changed) and composite a full frame
    pub fn render_frame(&mut self) -> &Buffer {
        let mut dirty = self.needs_layout;
        dirty |= self.terminal_lines.take_dirty();
        dirty |= self.gallery.take_dirty();
        dirty |= self.copy.take_dirty();
        for counter in self.uptimes.iter_mut().flatten() {
            dirty |= counter.take_dirty();
        }
        // Caret blink and crossfade animate between state changes
        dirty |= !self.terminal_lines.component().is_complete();
        let fading = self.gallery.component().transition(self.now).is_some();
        dirty |= fading || self.was_fading;
        self.was_fading = fading;

        if dirty {
            self.relayout();
        }

        let active = self.active_section();
        let clock = self.wall_clock();
        let percent = self.scroll.percent();
        let gallery_focused = self.gallery.component().is_focused();

        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.nav) {
            buf.reset();
            let area = buf.area;
            NavBar::new(active, clock).render(area, buf);
        }
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.page) {
            buf.reset();
            let area = buf.area;
            PageView::new(&self.document.lines).render(area, buf, &mut self.scroll);
        }
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.status) {
            buf.reset();
            let area = buf.area;
            StatusBar::new(active.title(), percent)
                .gallery_focused(gallery_focused)
                .render(area, buf);
        }

        if let Some(position) = self.expanded_photo {
            let gallery = self.gallery.component();
            if let (Some(item), Some(buf)) = (
                gallery.items().get(position),
                self.compositor.layer_buffer_mut(self.layers.overlay),
            ) {
                buf.reset();
                let area = buf.area;
                let (tag, caption) = gallery
                    .meta_for(item)
                    .map_or(("", ""), |meta| (meta.tag.as_str(), meta.caption.as_str()));
                PhotoView::new(position, &item.id)
                    .meta(tag, caption)
                    .render(area, buf);
            }
        }

        self.compositor.composite()
    }

    /// Render the UI
    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
        let output = self.render_frame();

        terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();

            for y in 0..area.height.min(output.area.height) {
                for x in 0..area.width.min(output.area.width) {
                    if let (Some(src), Some(dst)) = (output.cell((x, y)), buf.cell_mut((x, y))) {
                        *dst = src.clone();
                    }
                }
            }
        })?;

        Ok(())
    }
}
