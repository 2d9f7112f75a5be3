//! Digital clock widget
//!
//! Draws the current time as `HH:MM:SS` in a five-row block font, falling
//! back to plain text when the area is too small.

use chrono::NaiveDateTime;
use glowrise_core::format_clock;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

const GLYPH_ROWS: usize = 5;

pub struct DigitalClock {
    now: NaiveDateTime,
}

impl DigitalClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }
}

impl Widget for DigitalClock {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(" Now ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let text = format_clock(self.now);
        let rows = big_text_rows(&text);
        let width = rows[0].chars().count() as u16;
        let style = Style::default()
            .fg(palette::ACCENT)
            .add_modifier(Modifier::BOLD);

        if inner.height < GLYPH_ROWS as u16 || inner.width < width {
            Paragraph::new(text)
                .style(style)
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        }

        let x = inner.x + (inner.width - width) / 2;
        let y = inner.y + (inner.height - GLYPH_ROWS as u16) / 2;
        for (i, row) in rows.iter().enumerate() {
            buf.set_string(x, y + i as u16, row, style);
        }
    }
}

/// Render digits and `:` in the block font, one string per row.
pub fn big_text_rows(text: &str) -> [String; GLYPH_ROWS] {
    let mut rows: [String; GLYPH_ROWS] = Default::default();
    for (i, c) in text.chars().enumerate() {
        let glyph = glyph(c);
        for (row, part) in rows.iter_mut().zip(glyph) {
            if i > 0 {
                row.push(' ');
            }
            row.push_str(part);
        }
    }
    rows
}

fn glyph(c: char) -> [&'static str; GLYPH_ROWS] {
    match c {
        '0' => ["███", "█ █", "█ █", "█ █", "███"],
        '1' => ["  █", "  █", "  █", "  █", "  █"],
        '2' => ["███", "  █", "███", "█  ", "███"],
        '3' => ["███", "  █", "███", "  █", "███"],
        '4' => ["█ █", "█ █", "███", "  █", "  █"],
        '5' => ["███", "█  ", "███", "  █", "███"],
        '6' => ["███", "█  ", "███", "█ █", "███"],
        '7' => ["███", "  █", "  █", "  █", "  █"],
        '8' => ["███", "█ █", "███", "█ █", "███"],
        '9' => ["███", "█ █", "███", "  █", "███"],
        ':' => [" ", "▪", " ", "▪", " "],
        _ => ["   ", "   ", "   ", "   ", "   "],
    }
}
