//! Screen layout definitions for the TUI
//!
//! Left column: clock and controls. Right column: the bedroom scene with
//! the bulb above the sleeper.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, tagline and key hints
    pub header: Rect,

    /// Big `HH:MM:SS` clock
    pub clock: Rect,

    /// STOP banner and snooze/dismiss buttons
    pub controls: Rect,

    pub gauge: Rect,

    /// Alarm time display / editor
    pub alarm: Rect,

    /// Whole bedroom scene (room background)
    pub scene: Rect,

    /// Upper part of the scene holding the bulb
    pub bulb: Rect,

    /// Lower part of the scene holding the sleeper
    pub sleeper: Rect,
}

pub const HEADER_HEIGHT: u16 = 3;
pub const CLOCK_HEIGHT: u16 = 7;
pub const CONTROLS_HEIGHT: u16 = 4;
pub const GAUGE_HEIGHT: u16 = 3;
pub const ALARM_HEIGHT: u16 = 4;

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area);

    let [panel, scene] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Min(0)]).areas(body);

    let [clock, controls, gauge, alarm, _rest] = Layout::vertical([
        Constraint::Length(CLOCK_HEIGHT),
        Constraint::Length(CONTROLS_HEIGHT),
        Constraint::Length(GAUGE_HEIGHT),
        Constraint::Length(ALARM_HEIGHT),
        Constraint::Min(0),
    ])
    .areas(panel);

    let [bulb, sleeper] =
        Layout::vertical([Constraint::Percentage(50), Constraint::Min(0)]).areas(scene);

    ScreenAreas {
        header,
        clock,
        controls,
        gauge,
        alarm,
        scene,
        bulb,
        sleeper,
    }
}
