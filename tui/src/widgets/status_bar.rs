//! Status Bar Widget
//!
//! One row pinned to the bottom with key hints and scroll position.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::theme;

const HINTS_FULL: &str = " ↑↓ scroll · tab/1-7 sections · ←→ gallery · space pause · enter expand · c copy · q quit";
const HINTS_SHORT: &str = " ↑↓ scroll · tab sections · q quit";

/// Bottom status bar
pub struct StatusBar<'a> {
    section: &'a str,
    percent: u16,
    gallery_focused: bool,
}

impl<'a> StatusBar<'a> {
    /// Bar for the current section title and scroll percentage
    pub fn new(section: &'a str, percent: u16) -> Self {
        Self {
            section,
            percent,
            gallery_focused: false,
        }
    }

    /// Mark the gallery as holding the arrow keys
    pub fn gallery_focused(mut self, focused: bool) -> Self {
        self.gallery_focused = focused;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base = Style::default().fg(theme::CREAM_FAINT).bg(theme::CHARCOAL_2);
        buf.set_style(area, base);
        if area.height == 0 {
            return;
        }

        let right = if self.gallery_focused {
            format!("GALLERY ◆ {} {:>3}% ", self.section, self.percent)
        } else {
            format!("{} {:>3}% ", self.section, self.percent)
        };
        let right_width = right.width();
        let room = usize::from(area.width).saturating_sub(right_width + 1);

        let hints = if HINTS_FULL.width() <= room {
            HINTS_FULL
        } else {
            HINTS_SHORT
        };
        if hints.width() <= room {
            buf.set_string(area.x, area.y, hints, base);
        }

        #[allow(clippy::cast_possible_truncation)]
        let x = area.x + area.width.saturating_sub(right_width as u16);
        buf.set_string(x, area.y, right, Style::default().fg(theme::CREAM_DIM).bg(theme::CHARCOAL_2));
    }
}
