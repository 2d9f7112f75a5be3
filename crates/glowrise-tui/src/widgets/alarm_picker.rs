//! Alarm time picker
//!
//! Shows the alarm time and a countdown, or the `HH:MM` editor while the
//! user is changing it.

use glowrise_app::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub struct AlarmPicker<'a> {
    state: &'a AppState,
}

impl<'a> AlarmPicker<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn display_lines(&self) -> Vec<Line<'static>> {
        let clock = &self.state.alarm_clock;
        let time_line = Line::from(vec![
            Span::styled("⏰ Wake at ", styles::text_secondary()),
            Span::styled(clock.alarm().to_string(), styles::accent_bold()),
        ]);

        let window = clock.profile().window_secs();
        let status = match clock.delta_secs() {
            _ if clock.is_ringing() => Span::styled("Ringing", styles::error_hint()),
            Some(delta) if delta > window => Span::styled(
                format!("Glow starts in {}", format_countdown(delta - window)),
                styles::text_muted(),
            ),
            Some(delta) if delta > 0.0 => Span::styled(
                format!("Alarm in {}", format_countdown(delta)),
                Style::default().fg(palette::ACCENT),
            ),
            _ => Span::raw(""),
        };

        vec![time_line, Line::from(status)]
    }

    fn editor_lines(&self) -> Vec<Line<'static>> {
        let editor = &self.state.alarm_editor;
        let edit_line = Line::from(vec![
            Span::styled("⏰ Wake at ", styles::text_secondary()),
            Span::styled(
                format!("{}▏", editor.buffer()),
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let hint = match editor.error() {
            Some(error) => Span::styled(error.to_string(), styles::error_hint()),
            None => Span::styled("24-hour HH:MM", styles::text_muted()),
        };
        vec![edit_line, Line::from(hint)]
    }
}

impl Widget for AlarmPicker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let editing = self.state.is_editing_alarm();
        let block = styles::glass_block(editing)
            .title(if editing { " Set alarm " } else { " Wake-up " })
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = if editing {
            self.editor_lines()
        } else {
            self.display_lines()
        };
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

/// Whole seconds remaining as `HH:MM:SS`, rounded up.
pub fn format_countdown(secs: f64) -> String {
    let total = secs.max(0.0).ceil() as u64;
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
