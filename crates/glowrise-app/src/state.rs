//! Application state (Model in TEA pattern)

use chrono::NaiveDateTime;
use glowrise_core::{AlarmClock, AlarmTime, GlowProfile, Preset, Reading};

use crate::editor::AlarmEditor;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UiMode {
    /// Clock, bulb and alarm controls
    #[default]
    Normal,

    /// Alarm picker is focused and accepts `HH:MM` input
    EditingAlarm,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPhase {
    #[default]
    Running,
    /// First quit request while the light is on; a second one exits
    ConfirmingQuit,
    Quitting,
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    /// Alarm state machine
    pub alarm_clock: AlarmClock,

    /// Preset the profile was built from, for display
    pub preset: Preset,

    /// Last observed wall-clock time
    pub now: NaiveDateTime,

    /// Latest brightness evaluation
    pub reading: Option<Reading>,

    pub ui_mode: UiMode,

    pub phase: AppPhase,

    pub alarm_editor: AlarmEditor,
}

impl AppState {
    pub fn new(profile: GlowProfile, preset: Preset, alarm: AlarmTime, now: NaiveDateTime) -> Self {
        Self {
            alarm_clock: AlarmClock::new(profile, alarm),
            preset,
            now,
            reading: None,
            ui_mode: UiMode::Normal,
            phase: AppPhase::Running,
            alarm_editor: AlarmEditor::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Ask to quit. While the light is ringing or held on the first request
    /// only arms a confirmation.
    pub fn request_quit(&mut self) {
        let light_on = self.alarm_clock.is_ringing() || self.alarm_clock.is_held_on();
        self.phase = match self.phase {
            AppPhase::Running if light_on => AppPhase::ConfirmingQuit,
            _ => AppPhase::Quitting,
        };
    }

    /// Any other action abandons a pending quit confirmation.
    pub fn cancel_quit(&mut self) {
        if self.phase == AppPhase::ConfirmingQuit {
            self.phase = AppPhase::Running;
        }
    }

    pub fn is_editing_alarm(&self) -> bool {
        self.ui_mode == UiMode::EditingAlarm
    }
}
