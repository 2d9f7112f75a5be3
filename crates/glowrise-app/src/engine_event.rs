//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use chrono::NaiveDateTime;
use glowrise_core::AlarmTime;

use crate::handler::UpdateAction;

/// Domain events emitted by the Engine for external consumers.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Alarm
    // ─────────────────────────────────────────────────────────
    /// The alarm instant was reached and ringing began
    RingingStarted { alarm: AlarmTime, at: NaiveDateTime },

    /// Ringing snoozed; the alarm moved to `until`
    Snoozed { until: AlarmTime },

    /// Ringing dismissed until the next daily occurrence
    Dismissed { alarm: AlarmTime },

    /// A held light was released
    Stopped,

    /// The alarm time of day changed
    AlarmTimeChanged { alarm: AlarmTime },

    // ─────────────────────────────────────────────────────────
    // Light
    // ─────────────────────────────────────────────────────────
    /// Displayed brightness or the ringing/held flags changed
    BrightnessChanged {
        brightness: f64,
        percent: u8,
        ringing: bool,
        held_on: bool,
    },

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Stable snake_case name, used for logging and filtering.
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::RingingStarted { .. } => "ringing_started",
            EngineEvent::Snoozed { .. } => "snoozed",
            EngineEvent::Dismissed { .. } => "dismissed",
            EngineEvent::Stopped => "stopped",
            EngineEvent::AlarmTimeChanged { .. } => "alarm_time_changed",
            EngineEvent::BrightnessChanged { .. } => "brightness_changed",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}

impl From<UpdateAction> for EngineEvent {
    fn from(action: UpdateAction) -> Self {
        match action {
            UpdateAction::RingingStarted { alarm, at } => EngineEvent::RingingStarted { alarm, at },
            UpdateAction::Snoozed { until } => EngineEvent::Snoozed { until },
            UpdateAction::Dismissed { alarm } => EngineEvent::Dismissed { alarm },
            UpdateAction::Stopped => EngineEvent::Stopped,
            UpdateAction::AlarmTimeChanged { alarm } => EngineEvent::AlarmTimeChanged { alarm },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_names() {
        assert_eq!(EngineEvent::Stopped.event_type(), "stopped");
        assert_eq!(EngineEvent::Shutdown.event_type(), "shutdown");
        let alarm = AlarmTime::default();
        assert_eq!(
            EngineEvent::AlarmTimeChanged { alarm }.event_type(),
            "alarm_time_changed"
        );
    }

    #[test]
    fn test_from_update_action() {
        let until = AlarmTime::new(6, 35).unwrap();
        assert_eq!(
            EngineEvent::from(UpdateAction::Snoozed { until }),
            EngineEvent::Snoozed { until }
        );
        assert_eq!(EngineEvent::from(UpdateAction::Stopped), EngineEvent::Stopped);
    }
}
