//! Ceiling bulb with a pulsing halo
//!
//! The glass color follows the brightness band, the halo reach follows the
//! brightness, and the filament shows above half brightness.

use glowrise_core::appearance::{filament_opacity, glow_intensity, halo_radius, pulse_opacity};
use glowrise_core::{BulbTone, Palette};
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::theme::palette;

/// Glass silhouette, widest rows in the middle.
const GLASS_ROWS: [u16; 5] = [5, 7, 7, 5, 3];
const GLASS_HEIGHT: u16 = GLASS_ROWS.len() as u16;
const MIN_WIDTH: u16 = 9;
const MIN_HEIGHT: u16 = GLASS_HEIGHT + 2;

pub const HALO_SYMBOL: &str = "░";
pub const FILAMENT_SYMBOL: &str = "~";

pub struct Bulb {
    brightness: f64,
    palette: Palette,
    pulse_ms: u64,
}

impl Bulb {
    pub fn new(brightness: f64, palette: Palette, pulse_ms: u64) -> Self {
        Self {
            brightness,
            palette,
            pulse_ms,
        }
    }
}

fn put(buf: &mut Buffer, area: Rect, x: u16, y: u16, symbol: &str, fg: Color) {
    if !area.contains((x, y).into()) {
        return;
    }
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(symbol).set_fg(fg);
    }
}

impl Widget for Bulb {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return;
        }

        let cx = area.x + area.width / 2;
        let glass_top = area.y + ((area.height - GLASS_HEIGHT) / 2).max(2);
        let cy = glass_top + GLASS_HEIGHT / 2;

        // Halo first so the glass covers its center
        let max_radius = (area.height / 2).min(area.width / 4);
        let radius = halo_radius(self.brightness, max_radius);
        if radius > 0 {
            let strength = pulse_opacity(self.pulse_ms) * glow_intensity(self.brightness);
            let color = palette::dim(palette::glow_color(self.palette), strength);
            let r = f64::from(radius);
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    let dx = (f64::from(x) - f64::from(cx)) / 2.0;
                    let dy = f64::from(y) - f64::from(cy);
                    if dx * dx + dy * dy <= r * r {
                        put(buf, area, x, y, HALO_SYMBOL, color);
                    }
                }
            }
        }

        // Cord and cap
        for y in area.y..glass_top.saturating_sub(1) {
            put(buf, area, cx, y, "│", palette::FIXTURE);
        }
        for dx in 0..3 {
            put(buf, area, cx - 1 + dx, glass_top - 1, "▄", palette::FIXTURE);
        }

        let glass = palette::bulb_color(self.palette, BulbTone::from_brightness(self.brightness));
        for (row, width) in (0..).zip(GLASS_ROWS) {
            let left = cx - width / 2;
            for dx in 0..width {
                put(buf, area, left + dx, glass_top + row, "█", glass);
            }
        }

        if let Some(opacity) = filament_opacity(self.brightness) {
            let color = palette::dim(palette::ACCENT_LIGHT, 0.5 + opacity / 2.0);
            for dx in 0..3 {
                let x = cx - 1 + dx;
                put(buf, area, x, cy, FILAMENT_SYMBOL, color);
                if let Some(cell) = buf.cell_mut((x, cy)) {
                    cell.set_bg(glass);
                }
            }
        }
    }
}
