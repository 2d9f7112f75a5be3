//! Main render/view function (View in TEA pattern)

use glowrise_app::state::AppState;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI.
///
/// Pure with respect to `state`; `pulse_ms` drives the halo animation and
/// comes from the runner's own clock.
pub fn view(frame: &mut Frame, state: &AppState, pulse_ms: u64) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    let clock = &state.alarm_clock;
    let brightness = clock.brightness();
    let glow_palette = clock.profile().palette;

    frame.render_widget(widgets::MainHeader::new(state.preset, state.ui_mode), areas.header);
    frame.render_widget(widgets::DigitalClock::new(state.now), areas.clock);
    frame.render_widget(widgets::AlarmControls::new(state), areas.controls);
    frame.render_widget(
        widgets::BrightnessGauge::new(brightness, glow_palette),
        areas.gauge,
    );
    frame.render_widget(widgets::AlarmPicker::new(state), areas.alarm);

    frame.render_widget(widgets::Room::new(brightness), areas.scene);
    frame.render_widget(
        widgets::Bulb::new(brightness, glow_palette, pulse_ms),
        areas.bulb,
    );
    frame.render_widget(widgets::SleeperFigure::new(brightness), areas.sleeper);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{at, test_state, TestTerminal};
    use glowrise_app::process::process_message;
    use glowrise_app::Message;
    use glowrise_core::Preset;

    #[test]
    fn test_view_during_pre_glow() {
        let mut state = test_state(Preset::Quick, at(6, 29, 45));
        process_message(&mut state, Message::Refresh);

        let mut term = TestTerminal::new();
        term.draw_with(|frame| view(frame, &state, 0));

        assert!(term.buffer_contains("GLOW RISE"));
        assert!(term.buffer_contains("53%"));
        assert!(term.buffer_contains("Wake at 06:30"));
        assert!(term.buffer_contains("Sleeping"));
        assert!(!term.buffer_contains("STOP ALARM"));
    }

    #[test]
    fn test_view_when_alarm_fires() {
        let mut state = test_state(Preset::Quick, at(6, 30, 0));
        process_message(&mut state, Message::Refresh);

        let mut term = TestTerminal::new();
        term.draw_with(|frame| view(frame, &state, 0));

        assert!(term.buffer_contains("100%"));
        assert!(term.buffer_contains("STOP ALARM"));
        assert!(term.buffer_contains("Snooze [s]"));
    }

    #[test]
    fn test_view_survives_tiny_terminal() {
        let state = test_state(Preset::Classic, at(6, 0, 0));
        let mut term = TestTerminal::with_size(20, 6);
        term.draw_with(|frame| view(frame, &state, 0));
        assert!(term.buffer_contains("GLOW"));
    }
}
