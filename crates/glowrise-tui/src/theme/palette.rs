//! Color palette for the bedroom scene and control panel.
//!
//! Fixed colors are constants. Colors that follow the bulb (bulb glass,
//! glow, room walls) are computed from brightness and the active
//! [`Palette`].

use glowrise_core::{BulbTone, Palette};
use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Rgb(14, 16, 22);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Rgb(251, 191, 36);

// --- Accent (amber title gradient) ---
pub const ACCENT: Color = Color::Rgb(251, 191, 36);
pub const ACCENT_LIGHT: Color = Color::Rgb(253, 224, 71);
pub const ACCENT_DEEP: Color = Color::Rgb(234, 179, 8);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_RED: Color = Color::Rgb(239, 68, 68);
pub const STATUS_YELLOW: Color = Color::Rgb(234, 179, 8);
pub const STATUS_GREEN: Color = Color::Rgb(16, 185, 129);

// --- Sleeper ---
pub const SKIN: Color = Color::Rgb(209, 178, 148);
pub const HAIR: Color = Color::Rgb(92, 76, 61);
pub const EYE: Color = Color::Rgb(61, 51, 41);
pub const MOUTH: Color = Color::Rgb(166, 128, 89);
pub const PILLOW: Color = Color::Rgb(217, 217, 217);
pub const BLANKET: Color = Color::Rgb(122, 153, 184);
pub const BLANKET_EDGE: Color = Color::Rgb(89, 127, 166);

// --- Bulb ---
pub const BULB_OFF: Color = Color::Rgb(242, 242, 242);
pub const FIXTURE: Color = Color::Rgb(90, 90, 96);

/// Room wall hue and saturation
const ROOM_HUE: f64 = 220.0;
const ROOM_SATURATION: f64 = 0.2;

/// Glass color for a brightness band.
pub fn bulb_color(palette: Palette, tone: BulbTone) -> Color {
    match (palette, tone) {
        (_, BulbTone::Off) => BULB_OFF,
        (Palette::Amber, BulbTone::DimWarm) => Color::Rgb(255, 230, 178),
        (Palette::Amber, BulbTone::MediumGlow) => Color::Rgb(255, 191, 102),
        (Palette::Amber, BulbTone::BrightWarm) => Color::Rgb(255, 153, 51),
        (Palette::Sunrise, BulbTone::DimWarm) => Color::Rgb(255, 230, 153),
        (Palette::Sunrise, BulbTone::MediumGlow) => Color::Rgb(255, 151, 77),
        (Palette::Sunrise, BulbTone::BrightWarm) => Color::Rgb(255, 84, 41),
    }
}

/// Halo color at full pulse.
pub fn glow_color(palette: Palette) -> Color {
    match palette {
        Palette::Amber => Color::Rgb(255, 178, 102),
        Palette::Sunrise => Color::Rgb(255, 130, 77),
    }
}

/// Wall color for a lightness in percent.
pub fn room_color(lightness: f64) -> Color {
    hsl(ROOM_HUE, ROOM_SATURATION, lightness / 100.0)
}

/// Scale an RGB color toward black; `factor` is clamped to `0.0..=1.0`.
pub fn dim(color: Color, factor: f64) -> Color {
    let factor = factor.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            scale_channel(r, factor),
            scale_channel(g, factor),
            scale_channel(b, factor),
        ),
        other => other,
    }
}

fn scale_channel(channel: u8, factor: f64) -> u8 {
    (f64::from(channel) * factor).round() as u8
}

/// HSL to RGB with hue in degrees, saturation and lightness in `0.0..=1.0`.
fn hsl(hue: f64, saturation: f64, lightness: f64) -> Color {
    let l = lightness.clamp(0.0, 1.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * saturation;
    let h = (hue % 360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Color::Rgb(to_u8(r), to_u8(g), to_u8(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlit_bulb_same_for_every_palette() {
        assert_eq!(bulb_color(Palette::Amber, BulbTone::Off), BULB_OFF);
        assert_eq!(bulb_color(Palette::Sunrise, BulbTone::Off), BULB_OFF);
    }

    #[test]
    fn test_palettes_differ_when_lit() {
        assert_ne!(
            bulb_color(Palette::Amber, BulbTone::BrightWarm),
            bulb_color(Palette::Sunrise, BulbTone::BrightWarm)
        );
    }

    #[test]
    fn test_hsl_matches_known_values() {
        assert_eq!(hsl(0.0, 0.0, 1.0), Color::Rgb(255, 255, 255));
        assert_eq!(hsl(0.0, 0.0, 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(hsl(30.0, 1.0, 0.6), Color::Rgb(255, 153, 51));
    }

    #[test]
    fn test_room_gets_lighter_with_lightness() {
        let Color::Rgb(dark, _, _) = room_color(11.0) else {
            panic!("expected rgb")
        };
        let Color::Rgb(light, _, _) = room_color(30.0) else {
            panic!("expected rgb")
        };
        assert!(light > dark);
    }

    #[test]
    fn test_dim_scales_rgb_only() {
        assert_eq!(dim(Color::Rgb(200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(dim(Color::Red, 0.5), Color::Red);
    }
}
