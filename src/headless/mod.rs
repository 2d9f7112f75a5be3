//! Headless mode - NDJSON event output instead of the terminal UI
//!
//! Each line on stdout is one JSON object with an `"event"` field. Useful
//! for scripting the alarm or driving it from tests.
//!
//! # Example Output
//!
//! ```json
//! {"event":"started","alarm":"06:30","preset":"quick","timestamp":1773469800000}
//! {"event":"tick","clock":"06:29:45","alarm":"06:30","brightness":52.5,"percent":53,"ringing":false,"held_on":false,"timestamp":1773469785000}
//! {"event":"ringing_started","alarm":"06:30","at":"06:30:00","timestamp":1773469800000}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use glowrise_app::{AppState, EngineEvent};
use glowrise_core::format_clock;
use serde::Serialize;
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Engine is up and the first reading is available
    Started {
        alarm: String,
        preset: String,
        timestamp: i64,
    },

    /// Once per clock tick
    Tick {
        clock: String,
        alarm: String,
        brightness: f64,
        percent: u8,
        ringing: bool,
        held_on: bool,
        timestamp: i64,
    },

    RingingStarted {
        alarm: String,
        at: String,
        timestamp: i64,
    },

    Snoozed {
        until: String,
        timestamp: i64,
    },

    Dismissed {
        alarm: String,
        timestamp: i64,
    },

    Stopped {
        timestamp: i64,
    },

    AlarmTimeChanged {
        alarm: String,
        timestamp: i64,
    },

    /// Bad stdin command or other non-fatal problem
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },

    Shutdown {
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one NDJSON line
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    /// Serialize as one line and flush
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        let json = serde_json::to_string(self).map_err(io::Error::other)?;
        writeln!(out, "{}", json)?;
        out.flush()
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn started(state: &AppState) -> Self {
        Self::Started {
            alarm: state.alarm_clock.alarm().to_string(),
            preset: state.preset.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn tick(state: &AppState) -> Self {
        let clock = &state.alarm_clock;
        Self::Tick {
            clock: format_clock(state.now),
            alarm: clock.alarm().to_string(),
            brightness: clock.brightness(),
            percent: clock.percent(),
            ringing: clock.is_ringing(),
            held_on: clock.is_held_on(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Map an engine event onto its NDJSON form.
    ///
    /// Brightness changes are left out; every `tick` line already carries
    /// the brightness.
    pub fn from_engine_event(event: &EngineEvent) -> Option<Self> {
        let timestamp = Self::now();
        let mapped = match event {
            EngineEvent::RingingStarted { alarm, at } => Self::RingingStarted {
                alarm: alarm.to_string(),
                at: format_clock(*at),
                timestamp,
            },
            EngineEvent::Snoozed { until } => Self::Snoozed {
                until: until.to_string(),
                timestamp,
            },
            EngineEvent::Dismissed { alarm } => Self::Dismissed {
                alarm: alarm.to_string(),
                timestamp,
            },
            EngineEvent::Stopped => Self::Stopped { timestamp },
            EngineEvent::AlarmTimeChanged { alarm } => Self::AlarmTimeChanged {
                alarm: alarm.to_string(),
                timestamp,
            },
            EngineEvent::Shutdown => Self::Shutdown { timestamp },
            EngineEvent::BrightnessChanged { .. } => return None,
        };
        Some(mapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use glowrise_core::{AlarmTime, GlowProfile, Preset};
    use serde_json::Value;

    fn state_at(h: u32, m: u32, s: u32) -> AppState {
        let now = NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap();
        let mut state = AppState::new(
            GlowProfile::from_preset(Preset::Quick),
            Preset::Quick,
            AlarmTime::new(6, 30).unwrap(),
            now,
        );
        glowrise_app::process::process_message(&mut state, glowrise_app::Message::Refresh);
        state
    }

    fn to_json(event: &HeadlessEvent) -> Value {
        let mut out = Vec::new();
        event.write_to(&mut out).unwrap();
        let line = String::from_utf8(out).unwrap();
        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);
        serde_json::from_str(line.trim_end()).unwrap()
    }

    #[test]
    fn test_tick_shape() {
        let json = to_json(&HeadlessEvent::tick(&state_at(6, 29, 45)));

        assert_eq!(json["event"], "tick");
        assert_eq!(json["clock"], "06:29:45");
        assert_eq!(json["alarm"], "06:30");
        assert_eq!(json["brightness"], 52.5);
        assert_eq!(json["percent"], 53);
        assert_eq!(json["ringing"], false);
        assert_eq!(json["held_on"], false);
        assert!(json["timestamp"].is_i64());
    }

    #[test]
    fn test_started_names_preset() {
        let json = to_json(&HeadlessEvent::started(&state_at(6, 0, 0)));
        assert_eq!(json["event"], "started");
        assert_eq!(json["preset"], "quick");
    }

    #[test]
    fn test_engine_events_map_to_snake_case() {
        let snoozed = HeadlessEvent::from_engine_event(&EngineEvent::Snoozed {
            until: AlarmTime::new(6, 35).unwrap(),
        })
        .unwrap();
        let json = to_json(&snoozed);
        assert_eq!(json["event"], "snoozed");
        assert_eq!(json["until"], "06:35");

        let stopped = HeadlessEvent::from_engine_event(&EngineEvent::Stopped).unwrap();
        assert_eq!(to_json(&stopped)["event"], "stopped");

        let changed = HeadlessEvent::from_engine_event(&EngineEvent::AlarmTimeChanged {
            alarm: AlarmTime::new(7, 0).unwrap(),
        })
        .unwrap();
        assert_eq!(to_json(&changed)["event"], "alarm_time_changed");
    }

    #[test]
    fn test_brightness_changes_are_not_emitted() {
        let event = EngineEvent::BrightnessChanged {
            brightness: 52.5,
            percent: 53,
            ringing: false,
            held_on: false,
        };
        assert_eq!(HeadlessEvent::from_engine_event(&event), None);
    }

    #[test]
    fn test_error_shape() {
        let json = to_json(&HeadlessEvent::error("Unknown command 'louder'", false));
        assert_eq!(json["event"], "error");
        assert_eq!(json["fatal"], false);
        assert_eq!(json["message"], "Unknown command 'louder'");
    }
}
