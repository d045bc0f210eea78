//! Gallery frame
//!
//! Terminals can't show the photos, so each frame is a procedural pattern
//! keyed by the photo's position, drawn in that position's accent color.
//! During a crossfade the colors blend from the outgoing frame to the
//! incoming one and the glyphs soften while the blur is high.

use folio_core::content::{Accent, PHOTO_COUNT};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use super::{fit, DocumentBuilder, PageSnapshot, Target};
use crate::theme;

/// Pattern rows inside the frame
pub const ART_ROWS: usize = 7;

const ACCENT_CYCLE: [Accent; 4] = [Accent::Amber, Accent::Steel, Accent::Moss, Accent::Cream];

const SHADES: [char; 4] = [' ', '░', '▒', '▓'];

/// Accent color for the photo at `position`
pub(crate) fn frame_color(position: usize) -> Color {
    theme::accent(ACCENT_CYCLE[position % ACCENT_CYCLE.len()])
}

/// Shade level (0..4) of one art cell
fn shade(position: usize, row: usize, col: usize) -> usize {
    let seed = position * 7 + 3;
    let wave = (col + row * seed) / (seed % 5 + 2);
    (wave + position + row) % SHADES.len()
}

/// One row of the pattern for the photo at `position`
pub(crate) fn art_row(position: usize, row: usize, width: usize, soften: bool) -> String {
    (0..width)
        .map(|col| {
            let level = shade(position, row, col);
            let level = if soften { level.min(1) } else { level };
            SHADES[level]
        })
        .collect()
}

/// Draw the gallery frame, controls, caption and hints
pub(super) fn render(b: &mut DocumentBuilder, snap: &PageSnapshot<'_>) {
    let gallery = snap.gallery;
    let state = gallery.state();
    let focused = gallery.is_focused();

    let outer = usize::from(b.width()).min(60);
    let inner = outer.saturating_sub(4);

    let (color, art_position, soften) = match gallery.transition(snap.now) {
        Some(fade) => {
            let t = fade.blend(snap.now);
            let color = theme::blend(frame_color(fade.from), frame_color(fade.to), t);
            let position = if t < 0.5 { fade.from } else { fade.to };
            (color, position, fade.blur(snap.now) > 0.35)
        }
        None => (frame_color(state.current_index), state.current_index, false),
    };

    let border_color = if focused { theme::AMBER } else { theme::CREAM_FAINT };
    let border = Style::default().fg(border_color).bg(theme::CHARCOAL_3);
    let art = Style::default().fg(color).bg(theme::CHARCOAL_3);

    let top = b.row();

    let item = gallery.current();
    let tag = gallery.current_meta().map_or("", |meta| meta.tag.as_str());
    let title = if tag.is_empty() {
        format!(" {} ", item.id)
    } else {
        format!(" {} · {} ", item.id, tag)
    };
    let counter = format!(" {:02}/{:02} ", state.current_index + 1, gallery.len());
    let dashes = outer.saturating_sub(title.width() + counter.width() + 3);
    b.push(vec![
        Span::styled("┌─", border),
        Span::styled(title, Style::default().fg(theme::CREAM).bg(theme::CHARCOAL_3)),
        Span::styled("─".repeat(dashes), border),
        Span::styled(counter, Style::default().fg(theme::CREAM_DIM).bg(theme::CHARCOAL_3)),
        Span::styled("┐", border),
    ]);

    for row in 0..ART_ROWS {
        b.push(vec![
            Span::styled("│ ", border),
            Span::styled(art_row(art_position, row, inner, soften), art),
            Span::styled(" │", border),
        ]);
    }
    b.push(vec![Span::styled(format!("└{}┘", "─".repeat(outer.saturating_sub(2))), border)]);

    controls(b, snap);
    let bottom = b.row();
    b.hotspot(top..bottom, 0..outer as u16, Target::CarouselFrame);

    let caption = gallery
        .current_meta()
        .map_or_else(String::new, |meta| meta.caption.clone());
    b.push(vec![Span::styled(fit(&caption, inner), theme::dim())]);

    if focused {
        b.push(vec![Span::styled(
            "← → browse · space pause · hover to hold",
            Style::default().fg(theme::AMBER_DIM).bg(theme::CHARCOAL),
        )]);
    }
}

/// `< ●○○○ > ▶ AUTO` with a hotspot per button
fn controls(b: &mut DocumentBuilder, snap: &PageSnapshot<'_>) {
    let gallery = snap.gallery;
    let state = gallery.state();
    let row = b.row();

    let button = Style::default().fg(theme::CREAM).bg(theme::CHARCOAL_2).add_modifier(Modifier::BOLD);
    let mut spans = Vec::with_capacity(PHOTO_COUNT + 4);
    let mut col: u16 = 0;

    spans.push(Span::styled(" < ", button));
    b.hotspot(row..row + 1, col..col + 3, Target::CarouselPrev);
    col += 4;
    spans.push(Span::styled(" ", theme::text()));

    for index in 0..gallery.len() {
        let (glyph, style) = if index == state.current_index {
            ("● ", Style::default().fg(theme::AMBER).bg(theme::CHARCOAL))
        } else {
            ("○ ", theme::faint())
        };
        spans.push(Span::styled(glyph, style));
        b.hotspot(row..row + 1, col..col + 2, Target::CarouselDot(index));
        col += 2;
    }

    spans.push(Span::styled(" > ", button));
    b.hotspot(row..row + 1, col..col + 3, Target::CarouselNext);

    let label = if state.is_paused {
        Span::styled("  ❚❚ PAUSED", Style::default().fg(theme::AMBER_DIM).bg(theme::CHARCOAL))
    } else {
        Span::styled("  ▶ AUTO", Style::default().fg(theme::MOSS).bg(theme::CHARCOAL))
    };
    spans.push(label);

    b.push(spans);
}
