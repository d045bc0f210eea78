//! Typewriter Sequencer
//!
//! Reveals terminal-style lines one at a time. Each line waits for its own
//! delay (measured from mount), appears empty, then gains one character per
//! tick until complete. Lines with overlapping windows animate together.
//!
//! ```text
//! mount        delay          delay+C   delay+2C        delay+N*C
//!   │────────────│───────────────│─────────│── ... ──────────│
//!            visible ""        "$"       "$ "             complete
//! ```

use std::time::Duration;

use crate::lifecycle::{Component, Context};
use crate::scheduler::TimerId;

/// Cadence of the character reveal
pub const DEFAULT_CHAR_INTERVAL: Duration = Duration::from_millis(18);

/// Half period of the blinking caret
pub const CARET_BLINK: Duration = Duration::from_millis(500);

/// Caret glyph drawn after the last revealed character
pub const CARET: char = '▊';

/// Display category of a line (color only)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// A typed command (`$ ...`)
    Cmd,
    /// Plain log output (`> ...`)
    Log,
    /// Success output
    Ok,
}

/// A line of terminal text and when it starts revealing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextLine {
    /// Full text of the line
    pub text: String,
    /// Delay after mount before the line appears
    pub reveal_delay: Duration,
    /// Display category
    pub style: LineStyle,
}

impl TextLine {
    /// Create a line revealed immediately at mount
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            reveal_delay: Duration::ZERO,
            style,
        }
    }

    /// Reveal after `delay`
    #[must_use]
    pub fn after(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    /// Reveal after `secs` seconds, rounded to the millisecond
    ///
    /// Negative values count as zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn after_secs(self, secs: f32) -> Self {
        let millis = (f64::from(secs.max(0.0)) * 1000.0).round() as u64;
        self.after(Duration::from_millis(millis))
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Timers armed by the typewriter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypewriterTimer {
    /// Line `n` becomes visible
    Reveal(usize),
    /// Line `n` shows one more character
    Char(usize),
}

#[derive(Clone, Debug, Default)]
struct LineProgress {
    visible: bool,
    shown: usize,
    total: usize,
    reveal_timer: Option<TimerId>,
    char_timer: Option<TimerId>,
}

impl LineProgress {
    fn is_complete(&self) -> bool {
        self.visible && self.shown >= self.total
    }
}

/// What a surface should draw for one line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineView<'a> {
    /// Whether the line has appeared yet
    pub visible: bool,
    /// Characters revealed so far
    pub shown: &'a str,
    /// Display category
    pub style: LineStyle,
    /// Whether every character is revealed
    pub complete: bool,
}

impl LineView<'_> {
    /// Whether to draw the caret after `shown`
    pub fn show_caret(&self) -> bool {
        self.visible && !self.complete
    }
}

/// Sequential, timed text reveal
#[derive(Clone, Debug)]
pub struct Typewriter {
    lines: Vec<TextLine>,
    progress: Vec<LineProgress>,
    char_interval: Duration,
}

impl Typewriter {
    /// Create a typewriter for `lines` at the default cadence
    pub fn new(lines: Vec<TextLine>) -> Self {
        let progress = lines
            .iter()
            .map(|line| LineProgress {
                total: line.char_len(),
                ..LineProgress::default()
            })
            .collect();

        Self {
            lines,
            progress,
            char_interval: DEFAULT_CHAR_INTERVAL,
        }
    }

    /// Override the per-character cadence
    #[must_use]
    pub fn with_char_interval(mut self, interval: Duration) -> Self {
        self.char_interval = interval;
        self
    }

    /// Per-character cadence
    pub fn char_interval(&self) -> Duration {
        self.char_interval
    }

    /// Number of configured lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether there are no lines at all
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// View of line `index`
    pub fn line(&self, index: usize) -> Option<LineView<'_>> {
        let line = self.lines.get(index)?;
        let progress = self.progress.get(index)?;
        let end = line
            .text
            .char_indices()
            .nth(progress.shown)
            .map_or(line.text.len(), |(offset, _)| offset);

        Some(LineView {
            visible: progress.visible,
            shown: if progress.visible { &line.text[..end] } else { "" },
            style: line.style,
            complete: progress.is_complete(),
        })
    }

    /// Views of every line, in order
    pub fn lines(&self) -> impl Iterator<Item = LineView<'_>> + '_ {
        (0..self.lines.len()).filter_map(move |i| self.line(i))
    }

    /// Whether every line is fully revealed
    pub fn is_complete(&self) -> bool {
        self.progress.iter().all(LineProgress::is_complete)
    }

    /// Virtual time at which the whole sequence finishes
    pub fn finish_time(&self) -> Duration {
        self.lines
            .iter()
            .map(|line| line.reveal_delay + self.char_interval * line.char_len() as u32)
            .max()
            .unwrap_or(Duration::ZERO)
    }
}

impl Component for Typewriter {
    type Timer = TypewriterTimer;

    fn on_mount(&mut self, ctx: &mut Context<'_, TypewriterTimer>) {
        for (index, line) in self.lines.iter().enumerate() {
            let id = ctx.set_timeout(line.reveal_delay, TypewriterTimer::Reveal(index));
            self.progress[index].reveal_timer = Some(id);
        }
    }

    fn on_timer(&mut self, timer: TypewriterTimer, ctx: &mut Context<'_, TypewriterTimer>) {
        match timer {
            TypewriterTimer::Reveal(index) => {
                let Some(progress) = self.progress.get_mut(index) else {
                    return;
                };
                progress.reveal_timer = None;
                progress.visible = true;
                if progress.total > 0 {
                    progress.char_timer =
                        Some(ctx.set_interval(self.char_interval, TypewriterTimer::Char(index)));
                }
                tracing::debug!(line = index, "Typewriter line revealed");
                ctx.mark_dirty();
            }
            TypewriterTimer::Char(index) => {
                let Some(progress) = self.progress.get_mut(index) else {
                    return;
                };
                progress.shown = (progress.shown + 1).min(progress.total);
                if progress.shown >= progress.total {
                    if let Some(id) = progress.char_timer.take() {
                        ctx.clear_timer(id);
                    }
                }
                ctx.mark_dirty();
            }
        }
    }

    fn on_unmount(&mut self, ctx: &mut Context<'_, TypewriterTimer>) {
        for progress in &mut self.progress {
            if let Some(id) = progress.reveal_timer.take() {
                ctx.clear_timer(id);
            }
            if let Some(id) = progress.char_timer.take() {
                ctx.clear_timer(id);
            }
        }
    }
}

/// Whether the caret is lit at `elapsed`
pub fn caret_on(elapsed: Duration) -> bool {
    (elapsed.as_millis() / CARET_BLINK.as_millis()) % 2 == 0
}
