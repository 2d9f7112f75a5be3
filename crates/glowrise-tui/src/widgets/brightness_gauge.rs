//! Brightness gauge showing the rounded bulb percentage

use glowrise_core::{display_percent, BulbTone, Palette};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Gauge, Widget},
};

use crate::theme::{palette, styles};

pub struct BrightnessGauge {
    brightness: f64,
    palette: Palette,
}

impl BrightnessGauge {
    pub fn new(brightness: f64, palette: Palette) -> Self {
        Self {
            brightness,
            palette,
        }
    }
}

impl Widget for BrightnessGauge {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let percent = display_percent(self.brightness);
        let tone = BulbTone::from_brightness(self.brightness);
        let fill = match tone {
            BulbTone::Off => palette::TEXT_MUTED,
            lit => palette::bulb_color(self.palette, lit),
        };

        Gauge::default()
            .block(
                styles::glass_block(false)
                    .title(" Brightness ")
                    .style(Style::default().bg(palette::CARD_BG)),
            )
            .gauge_style(Style::default().fg(fill).bg(palette::CARD_BG))
            .label(format!("{percent}%"))
            .style(Style::default().add_modifier(Modifier::BOLD))
            .ratio((self.brightness / 100.0).clamp(0.0, 1.0))
            .render(area, buf);
    }
}
