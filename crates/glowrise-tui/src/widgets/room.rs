//! Bedroom wall behind the bulb and the sleeper
//!
//! A vertical gradient that lightens as the bulb brightens.

use glowrise_core::appearance::room_lightness;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::theme::palette;

pub struct Room {
    brightness: f64,
}

impl Room {
    pub fn new(brightness: f64) -> Self {
        Self { brightness }
    }
}

impl Widget for Room {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let (top, bottom) = room_lightness(self.brightness);
        let span = f64::from(area.height.saturating_sub(1).max(1));

        for row in 0..area.height {
            let t = f64::from(row) / span;
            let lightness = top + (bottom - top) * t;
            let line = Rect::new(area.x, area.y + row, area.width, 1);
            buf.set_style(line, Style::default().bg(palette::room_color(lightness)));
        }
    }
}
