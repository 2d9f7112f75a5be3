//! Alarm control bar
//!
//! Shows the STOP banner while the light is held on and the snooze/dismiss
//! buttons while the alarm rings. Otherwise a one-line status.

use glowrise_app::state::{AppPhase, AppState};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub const STOP_LABEL: &str = " ⏹ STOP ALARM [x] ";
pub const SNOOZE_LABEL: &str = " Snooze [s] ";
pub const DISMISS_LABEL: &str = " Dismiss [d] ";

pub struct AlarmControls<'a> {
    state: &'a AppState,
}

impl<'a> AlarmControls<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let clock = &self.state.alarm_clock;
        let mut lines = Vec::new();

        if self.state.phase == AppPhase::ConfirmingQuit {
            lines.push(Line::from(Span::styled(
                "Light is on. Press q again to quit",
                styles::error_hint(),
            )));
        }
        if clock.can_stop() {
            lines.push(Line::from(Span::styled(STOP_LABEL, styles::stop_button())));
        }
        if clock.is_ringing() {
            let snooze_minutes = clock.profile().snooze.as_secs() / 60;
            lines.push(Line::from(vec![
                Span::styled(SNOOZE_LABEL, styles::snooze_button()),
                Span::styled(format!(" {snooze_minutes} min "), styles::text_muted()),
                Span::raw(" "),
                Span::styled(DISMISS_LABEL, styles::dismiss_button()),
            ]));
        } else if clock.is_snoozed() {
            lines.push(Line::from(Span::styled(
                format!("Snoozed until {}", clock.alarm()),
                styles::text_secondary(),
            )));
        }
        if lines.is_empty() {
            lines.push(Line::from(Span::styled("Sleeping", styles::text_secondary())));
        }
        lines
    }
}

impl Widget for AlarmControls<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let ringing = self.state.alarm_clock.is_ringing();
        let block = styles::glass_block(ringing)
            .title(" Alarm ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.lines())
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{at, test_state, TestTerminal};
    use glowrise_app::Message;
    use glowrise_core::Preset;

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(44, 4);
        term.render_widget(AlarmControls::new(state), term.area());
        term
    }

    #[test]
    fn test_quiet_state_shows_sleeping() {
        let state = test_state(Preset::Quick, at(6, 0, 0));
        let term = render(&state);
        assert!(term.buffer_contains("Sleeping"));
        assert!(!term.buffer_contains("STOP ALARM"));
    }

    #[test]
    fn test_held_light_shows_stop_and_buttons() {
        let mut state = test_state(Preset::Quick, at(6, 29, 0));
        glowrise_app::process::process_message(&mut state, Message::Tick { now: at(6, 30, 0) });

        let term = render(&state);
        assert!(term.buffer_contains("STOP ALARM [x]"));
        assert!(term.buffer_contains("Snooze [s]"));
        assert!(term.buffer_contains("Dismiss [d]"));
        assert!(term.buffer_contains("5 min"));
    }

    #[test]
    fn test_classic_ringing_has_no_stop_banner() {
        let mut state = test_state(Preset::Classic, at(6, 29, 0));
        glowrise_app::process::process_message(&mut state, Message::Tick { now: at(6, 30, 0) });

        let term = render(&state);
        assert!(!term.buffer_contains("STOP ALARM"));
        assert!(term.buffer_contains("Snooze [s]"));
    }

    #[test]
    fn test_snoozed_status() {
        let mut state = test_state(Preset::Quick, at(6, 29, 0));
        glowrise_app::process::process_message(&mut state, Message::Tick { now: at(6, 30, 0) });
        glowrise_app::process::process_message(&mut state, Message::Snooze);

        let term = render(&state);
        assert!(term.buffer_contains("STOP ALARM [x]"));
        assert!(term.buffer_contains("Snoozed until 06:35"));
        assert!(!term.buffer_contains("Snooze [s]"));
    }
}
