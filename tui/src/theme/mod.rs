//! Theme and Colors
//!
//! The page's warm "control room" palette: charcoal backgrounds, cream
//! text and three accents (amber, steel, moss).

use folio_core::content::Accent;
use folio_core::LineStyle;
use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Backgrounds
// ============================================================================

/// Page background
pub const CHARCOAL: Color = Color::Rgb(15, 15, 13);

/// Raised panels (nav, terminal, cards)
pub const CHARCOAL_2: Color = Color::Rgb(22, 22, 19);

/// Inset panels (topology, gallery frame)
pub const CHARCOAL_3: Color = Color::Rgb(29, 29, 26);

// ============================================================================
// Accents
// ============================================================================

/// Primary accent
pub const AMBER: Color = Color::Rgb(224, 123, 57);

/// Dimmed primary accent
pub const AMBER_DIM: Color = Color::Rgb(168, 90, 40);

/// Secondary accent
pub const STEEL: Color = Color::Rgb(74, 127, 165);

/// Tertiary accent, also "healthy" status
pub const MOSS: Color = Color::Rgb(90, 122, 74);

/// Window-control red
pub const RUST: Color = Color::Rgb(139, 58, 42);

// ============================================================================
// Text
// ============================================================================

/// Body text
pub const CREAM: Color = Color::Rgb(232, 224, 208);

/// Secondary text
pub const CREAM_DIM: Color = Color::Rgb(160, 144, 128);

/// Rules and faint chrome
pub const CREAM_FAINT: Color = Color::Rgb(58, 53, 48);

/// Color for a content accent
pub fn accent(accent: Accent) -> Color {
    match accent {
        Accent::Amber => AMBER,
        Accent::Steel => STEEL,
        Accent::Moss => MOSS,
        Accent::Cream => CREAM,
    }
}

/// Color of a boot-terminal line
pub fn line_color(style: LineStyle) -> Color {
    match style {
        LineStyle::Cmd => AMBER,
        LineStyle::Log => CREAM_DIM,
        LineStyle::Ok => MOSS,
    }
}

/// Plain text on the page background
pub fn text() -> Style {
    Style::default().fg(CREAM).bg(CHARCOAL)
}

/// Secondary text on the page background
pub fn dim() -> Style {
    Style::default().fg(CREAM_DIM).bg(CHARCOAL)
}

/// Faint chrome on the page background
pub fn faint() -> Style {
    Style::default().fg(CREAM_FAINT).bg(CHARCOAL)
}

/// Bold accent text on the page background
pub fn heading(color: Color) -> Style {
    Style::default().fg(color).bg(CHARCOAL).add_modifier(Modifier::BOLD)
}

/// Mix two colors; `t = 0.0` is `from`, `t = 1.0` is `to`
///
/// Only RGB colors blend. Anything else snaps at the halfway point.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            Color::Rgb(mix(r1, r2, t), mix(g1, g2, t), mix(b1, b2, t))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn mix(a: u8, b: u8, t: f32) -> u8 {
    (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend(AMBER, STEEL, 0.0), AMBER);
        assert_eq!(blend(AMBER, STEEL, 1.0), STEEL);
        assert_eq!(blend(AMBER, STEEL, 7.0), STEEL);
    }

    #[test]
    fn test_blend_midpoint() {
        let mid = blend(Color::Rgb(0, 100, 200), Color::Rgb(100, 200, 0), 0.5);
        assert_eq!(mid, Color::Rgb(50, 150, 100));
    }

    #[test]
    fn test_blend_named_colors_snap() {
        assert_eq!(blend(Color::Red, Color::Blue, 0.49), Color::Red);
        assert_eq!(blend(Color::Red, Color::Blue, 0.5), Color::Blue);
    }
}
