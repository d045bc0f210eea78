//! PageView Widget
//!
//! A borderless, scrollable view over pre-rendered document lines.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::StatefulWidget;

use crate::theme;

/// Scroll state for the page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageViewState {
    /// Scroll offset (lines from top)
    pub scroll_offset: usize,
    /// Total document lines
    pub total_lines: usize,
    /// Visible rows
    pub viewport: usize,
}

impl PageViewState {
    /// Scroll by delta (positive = down), clamped to the document
    pub fn scroll(&mut self, delta: isize) {
        let target = self.scroll_offset.saturating_add_signed(delta);
        self.scroll_offset = target.min(self.max_scroll());
    }

    /// Put `row` at the top of the viewport (as far as the document allows)
    pub fn scroll_to(&mut self, row: usize) {
        self.scroll_offset = row.min(self.max_scroll());
    }

    /// Largest useful offset
    pub fn max_scroll(&self) -> usize {
        self.total_lines.saturating_sub(self.viewport)
    }

    /// How far down the page the viewport is, 0..=100
    pub fn percent(&self) -> u16 {
        let max = self.max_scroll();
        if max == 0 {
            return 100;
        }
        u16::try_from(self.scroll_offset.min(max) * 100 / max).unwrap_or(100)
    }
}

/// A borderless, scrollable page
pub struct PageView<'a> {
    lines: &'a [Line<'static>],
}

impl<'a> PageView<'a> {
    /// View over `lines`
    pub fn new(lines: &'a [Line<'static>]) -> Self {
        Self { lines }
    }
}

impl StatefulWidget for PageView<'_> {
    type State = PageViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        buf.set_style(area, theme::text());

        state.total_lines = self.lines.len();
        state.viewport = usize::from(area.height);
        state.scroll_offset = state.scroll_offset.min(state.max_scroll());

        for (i, line) in self
            .lines
            .iter()
            .skip(state.scroll_offset)
            .take(usize::from(area.height))
            .enumerate()
        {
            #[allow(clippy::cast_possible_truncation)]
            let y = area.y + i as u16;
            buf.set_line(area.x, y, line, area.width);
        }
    }
}
