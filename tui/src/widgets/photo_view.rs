//! Photo View Widget
//!
//! Full-screen lightbox over the page: a dimmed backdrop with one gallery
//! photo drawn large in the middle.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::page::{art_row, fit, frame_color};
use crate::theme;

/// Close hint in the frame's top-right corner
pub const CLOSE_HINT: &str = " ESC / CLICK TO CLOSE ";

/// Expanded view of one gallery photo
pub struct PhotoView<'a> {
    position: usize,
    id: &'a str,
    tag: &'a str,
    caption: &'a str,
}

impl<'a> PhotoView<'a> {
    /// View of the photo at `position` in the gallery order
    pub fn new(position: usize, id: &'a str) -> Self {
        Self {
            position,
            id,
            tag: "",
            caption: "",
        }
    }

    /// Tag and caption shown around the frame
    pub fn meta(mut self, tag: &'a str, caption: &'a str) -> Self {
        self.tag = tag;
        self.caption = caption;
        self
    }
}

/// Frame rectangle: 90% of the width and 85% of the height, centered
pub fn frame_area(area: Rect) -> Rect {
    let width = u16::try_from(u32::from(area.width) * 9 / 10).unwrap_or(area.width);
    let height = u16::try_from(u32::from(area.height) * 85 / 100).unwrap_or(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

impl Widget for PhotoView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().fg(theme::CREAM_FAINT).bg(theme::CHARCOAL));

        let frame = frame_area(area);
        if frame.width < 4 || frame.height < 3 {
            return;
        }

        let border = Style::default().fg(theme::STEEL).bg(theme::CHARCOAL_2);
        let art = Style::default().fg(frame_color(self.position)).bg(theme::CHARCOAL_2);
        let inner = usize::from(frame.width - 4);
        let right = frame.x + frame.width - 1;
        let bottom = frame.y + frame.height - 1;

        let title = if self.tag.is_empty() {
            format!(" {} ", self.id)
        } else {
            format!(" {} · {} ", self.id, self.tag)
        };
        let rule = "─".repeat(usize::from(frame.width - 2));
        buf.set_string(frame.x, frame.y, format!("┌{rule}┐"), border);
        buf.set_stringn(
            frame.x + 2,
            frame.y,
            &title,
            inner,
            Style::default().fg(theme::CREAM).bg(theme::CHARCOAL_2),
        );
        if title.width() + CLOSE_HINT.width() + 4 <= usize::from(frame.width) {
            #[allow(clippy::cast_possible_truncation)]
            let x = right.saturating_sub(CLOSE_HINT.width() as u16 + 1);
            buf.set_string(x, frame.y, CLOSE_HINT, Style::default().fg(theme::CREAM_DIM).bg(theme::CHARCOAL_2));
        }

        for (row, y) in (frame.y + 1..bottom).enumerate() {
            buf.set_string(frame.x, y, "│ ", border);
            buf.set_string(frame.x + 2, y, art_row(self.position, row, inner, false), art);
            buf.set_string(right - 1, y, " │", border);
        }
        buf.set_string(frame.x, bottom, format!("└{rule}┘"), border);

        if bottom + 1 < area.y + area.height && !self.caption.is_empty() {
            buf.set_string(frame.x + 2, bottom + 1, fit(self.caption, inner), theme::dim());
        }
    }
}
