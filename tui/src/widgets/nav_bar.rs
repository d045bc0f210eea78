//! Nav Bar Widget
//!
//! One row pinned to the top: brand, section links and the IST clock.

use std::ops::Range;

use chrono::{DateTime, FixedOffset, Utc};
use folio_core::content::Section;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::theme;

const BRAND: &str = " SYS://KS ";

/// Seconds east of UTC for India Standard Time
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// `DD/MM/YYYY HH:MM:SS IST` for a UTC instant
pub fn ist_clock(now: DateTime<Utc>) -> String {
    ist_format(now, "%d/%m/%Y %H:%M:%S")
}

fn ist_format(now: DateTime<Utc>, fmt: &str) -> String {
    FixedOffset::east_opt(IST_OFFSET_SECS).map_or_else(
        || format!("{} UTC", now.format(fmt)),
        |offset| format!("{} IST", now.with_timezone(&offset).format(fmt)),
    )
}

fn label(section: Section) -> String {
    format!(" {} {} ", section.index() + 1, section.title())
}

/// Column just past the last link when every link is shown
fn links_end() -> usize {
    BRAND.width() + 1 + Section::ALL.iter().map(|s| label(*s).width()).sum::<usize>()
}

/// Clock text for a bar of `width`
///
/// The date goes before any link does.
fn clock_for(width: u16, now: DateTime<Utc>) -> String {
    let full = ist_clock(now);
    if usize::from(width) >= links_end() + full.width() + 2 {
        full
    } else {
        ist_format(now, "%H:%M:%S")
    }
}

/// Columns each section link occupies in a bar of `width`
///
/// Links that don't fit before the clock are dropped from the end.
pub fn nav_layout(width: u16) -> Vec<(Section, Range<u16>)> {
    let clock_width = clock_for(width, DateTime::<Utc>::UNIX_EPOCH).width() + 2;
    let limit = usize::from(width).saturating_sub(clock_width);

    let mut out = Vec::new();
    let mut col = BRAND.width() + 1;
    for section in Section::ALL {
        let w = label(section).width();
        if col + w > limit {
            break;
        }
        #[allow(clippy::cast_possible_truncation)]
        out.push((section, col as u16..(col + w) as u16));
        col += w;
    }
    out
}

/// Section link under column `col`
pub fn nav_hit(width: u16, col: u16) -> Option<Section> {
    nav_layout(width)
        .into_iter()
        .find(|(_, cols)| cols.contains(&col))
        .map(|(section, _)| section)
}

/// Top navigation bar
pub struct NavBar {
    active: Section,
    now: DateTime<Utc>,
}

impl NavBar {
    /// Bar highlighting `active`, with the clock at `now`
    pub fn new(active: Section, now: DateTime<Utc>) -> Self {
        Self { active, now }
    }
}

impl Widget for NavBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base = Style::default().fg(theme::CREAM_DIM).bg(theme::CHARCOAL_2);
        buf.set_style(area, base);
        if area.height == 0 {
            return;
        }

        buf.set_string(area.x, area.y, BRAND, theme::heading(theme::AMBER).bg(theme::CHARCOAL_2));

        for (section, cols) in nav_layout(area.width) {
            let style = if section == self.active {
                Style::default()
                    .fg(theme::CHARCOAL)
                    .bg(theme::AMBER)
                    .add_modifier(Modifier::BOLD)
            } else {
                base
            };
            buf.set_string(area.x + cols.start, area.y, label(section), style);
        }

        let clock = format!("{} ", clock_for(area.width, self.now));
        #[allow(clippy::cast_possible_truncation)]
        let x = area.x + area.width.saturating_sub(clock.width() as u16);
        buf.set_string(x, area.y, clock, Style::default().fg(theme::MOSS).bg(theme::CHARCOAL_2));
    }
}
