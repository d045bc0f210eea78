//! Copy-to-Clipboard Feedback
//!
//! The contact panel's "copy e-mail" button. Writing to the clipboard is
//! best effort: the platform may refuse, and the failure is swallowed. The
//! button shows its confirmation for a fixed window either way.

use std::time::Duration;

use crate::lifecycle::{Component, Context};
use crate::scheduler::TimerId;

/// How long the confirmation stays up
pub const COPIED_WINDOW: Duration = Duration::from_millis(2000);

/// A destination for copied text
pub trait Clipboard {
    /// Write `text`; `false` if the platform refused
    fn write_text(&mut self, text: &str) -> bool;
}

/// Clipboard that drops everything (headless runs, no display server)
#[derive(Clone, Copy, Debug, Default)]
pub struct NullClipboard;

impl Clipboard for NullClipboard {
    fn write_text(&mut self, _text: &str) -> bool {
        false
    }
}

/// Timer armed by the feedback button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetCopied;

/// "Copied" confirmation state
#[derive(Clone, Debug, Default)]
pub struct CopyFeedback {
    copied: bool,
    last_write_ok: Option<bool>,
    reset: Option<TimerId>,
}

impl CopyFeedback {
    /// Create the button in its idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the confirmation is showing
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Whether the most recent write reached the clipboard
    pub fn last_write_ok(&self) -> Option<bool> {
        self.last_write_ok
    }

    /// Button label for the current state
    pub fn label(&self) -> &'static str {
        if self.copied {
            "✓ EMAIL COPIED TO CLIPBOARD"
        } else {
            "⎘ COPY EMAIL ADDRESS"
        }
    }

    /// Copy `text` and show the confirmation, restarting any open window
    pub fn copy(
        &mut self,
        clipboard: &mut dyn Clipboard,
        text: &str,
        ctx: &mut Context<'_, ResetCopied>,
    ) {
        let ok = clipboard.write_text(text);
        if !ok {
            tracing::warn!("Clipboard write was refused");
        }
        self.last_write_ok = Some(ok);

        if let Some(id) = self.reset.take() {
            ctx.clear_timer(id);
        }
        self.reset = Some(ctx.set_timeout(COPIED_WINDOW, ResetCopied));
        self.copied = true;
        ctx.mark_dirty();
    }
}

impl Component for CopyFeedback {
    type Timer = ResetCopied;

    fn on_mount(&mut self, _ctx: &mut Context<'_, ResetCopied>) {}

    fn on_timer(&mut self, _timer: ResetCopied, ctx: &mut Context<'_, ResetCopied>) {
        self.reset = None;
        self.copied = false;
        ctx.mark_dirty();
    }

    fn on_unmount(&mut self, ctx: &mut Context<'_, ResetCopied>) {
        if let Some(id) = self.reset.take() {
            ctx.clear_timer(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Mounted;

    #[derive(Default)]
    struct Recording {
        writes: Vec<String>,
    }

    impl Clipboard for Recording {
        fn write_text(&mut self, text: &str) -> bool {
            self.writes.push(text.to_string());
            true
        }
    }

    #[test]
    fn test_copy_shows_confirmation_for_window() {
        let mut clipboard = Recording::default();
        let mut m = Mounted::mount(CopyFeedback::new());

        m.update(|f, ctx| f.copy(&mut clipboard, "me@example.com", ctx));
        assert!(m.component().is_copied());
        assert_eq!(clipboard.writes, vec!["me@example.com"]);

        m.advance_to(Duration::from_millis(1999));
        assert!(m.component().is_copied());
        m.advance_to(Duration::from_millis(2000));
        assert!(!m.component().is_copied());
        assert_eq!(m.component().label(), "⎘ COPY EMAIL ADDRESS");
    }

    #[test]
    fn test_refused_write_still_confirms() {
        let mut m = Mounted::mount(CopyFeedback::new());
        m.update(|f, ctx| f.copy(&mut NullClipboard, "x", ctx));

        assert!(m.component().is_copied());
        assert_eq!(m.component().last_write_ok(), Some(false));
    }

    #[test]
    fn test_second_copy_restarts_window() {
        let mut m = Mounted::mount(CopyFeedback::new());
        m.update(|f, ctx| f.copy(&mut NullClipboard, "x", ctx));
        m.advance_to(Duration::from_millis(1500));
        m.update(|f, ctx| f.copy(&mut NullClipboard, "x", ctx));

        m.advance_to(Duration::from_millis(2500));
        assert!(m.component().is_copied());
        assert_eq!(m.pending_timers(), 1);
        m.advance_to(Duration::from_millis(3500));
        assert!(!m.component().is_copied());
    }
}
