//! Sleeping figure under a blanket
//!
//! Eyes open and the mouth smiles as the light comes up.

use glowrise_core::Sleeper;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::palette;

const FIGURE_HEIGHT: u16 = 5;
const BLANKET_ROWS: u16 = 3;

pub struct SleeperFigure {
    sleeper: Sleeper,
}

impl SleeperFigure {
    pub fn new(brightness: f64) -> Self {
        Self {
            sleeper: Sleeper::from_brightness(brightness),
        }
    }

    fn eye(&self) -> &'static str {
        if !self.sleeper.pupils_visible() {
            "─"
        } else if self.sleeper.drowsy() {
            "•"
        } else {
            "◉"
        }
    }

    fn mouth(&self) -> &'static str {
        if self.sleeper.smiling() {
            "◡"
        } else {
            "─"
        }
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let face = Style::default().fg(palette::EYE).bg(palette::SKIN);
        let eye = self.eye();
        let snore = if self.sleeper.drowsy() { "      z Z" } else { "" };

        let mut lines = vec![
            Line::from(Span::styled(snore, Style::default().fg(palette::TEXT_MUTED))),
            Line::from(Span::styled("▄▄▄▄▄▄▄▄▄▄▄", Style::default().fg(palette::HAIR))),
            Line::from(Span::styled(format!("   {eye}   {eye}   "), face)),
            Line::from(Span::styled(
                format!("     {}     ", self.mouth()),
                face.fg(palette::MOUTH),
            )),
            Line::from(Span::styled(
                "▀".repeat(17),
                Style::default().fg(palette::PILLOW),
            )),
        ];

        let width = usize::from(width);
        lines.push(Line::from(Span::styled(
            "▄".repeat(width),
            Style::default().fg(palette::BLANKET_EDGE),
        )));
        for _ in 1..BLANKET_ROWS {
            lines.push(Line::from(Span::styled(
                "█".repeat(width),
                Style::default().fg(palette::BLANKET),
            )));
        }
        lines
    }
}

impl Widget for SleeperFigure {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = FIGURE_HEIGHT + BLANKET_ROWS;
        let top = area.y + area.height.saturating_sub(height);
        let target = Rect::new(area.x, top, area.width, area.height.min(height));

        Paragraph::new(self.lines(area.width))
            .alignment(Alignment::Center)
            .render(target, buf);
    }
}
