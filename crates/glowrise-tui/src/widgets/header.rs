//! Header bar widget
//!
//! Title with an amber gradient, tagline, preset pill and key hints for the
//! current mode.

use glowrise_app::state::UiMode;
use glowrise_core::Preset;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

pub const TITLE: &str = "GLOW RISE";
pub const TAGLINE: &str = "Glowing to wake you up gently";

/// Main header showing app title, tagline, preset and keybindings
pub struct MainHeader {
    preset: Preset,
    ui_mode: UiMode,
}

impl MainHeader {
    pub fn new(preset: Preset, ui_mode: UiMode) -> Self {
        Self { preset, ui_mode }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title_line = Line::from(title_spans(self.preset));
        let title_width = title_line.width() as u16;
        let tagline = Span::styled(
            TAGLINE,
            styles::text_secondary().add_modifier(Modifier::ITALIC),
        );
        let tagline_width = tagline.width() as u16;
        let hints_line = Line::from(hint_spans(self.ui_mode));
        let hints_width = hints_line.width() as u16;

        buf.set_line(inner.x, inner.y, &title_line, inner.width);

        // Hints are right-aligned; the tagline only shows when everything fits
        let right_edge = inner.x + inner.width;
        if title_width + hints_width + 2 <= inner.width {
            buf.set_line(right_edge - hints_width, inner.y, &hints_line, hints_width);

            if title_width + tagline_width + hints_width + 4 <= inner.width {
                buf.set_span(inner.x + title_width + 2, inner.y, &tagline, tagline_width);
            }
        }
    }
}

/// " ☀ GLOW RISE · quick"
fn title_spans(preset: Preset) -> Vec<Span<'static>> {
    let gradient = [palette::ACCENT_LIGHT, palette::ACCENT, palette::ACCENT_DEEP];
    let letters = TITLE.chars().count();

    let mut spans = vec![
        Span::raw(" "),
        Span::styled("☀", Style::default().fg(palette::ACCENT)),
        Span::raw(" "),
    ];
    for (i, c) in TITLE.chars().enumerate() {
        let color = gradient[i * gradient.len() / letters];
        spans.push(Span::styled(
            c.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::styled(" · ", styles::text_muted()));
    spans.push(Span::styled(preset.as_str(), styles::text_secondary()));
    spans
}

fn hint_spans(ui_mode: UiMode) -> Vec<Span<'static>> {
    let hints: &[(&str, &str)] = match ui_mode {
        UiMode::Normal => &[("e", "Alarm"), ("q", "Quit")],
        UiMode::EditingAlarm => &[("↑↓", "±1 min"), ("Enter", "Save"), ("Esc", "Cancel")],
    };

    let mut spans = Vec::new();
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled("[", styles::text_muted()));
        spans.push(Span::styled(*key, styles::key_hint()));
        spans.push(Span::styled(format!("] {label}"), styles::text_muted()));
    }
    spans.push(Span::raw(" "));
    spans
}
