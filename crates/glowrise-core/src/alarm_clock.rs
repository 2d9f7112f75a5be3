//! Alarm clock state machine
//!
//! [`AlarmClock`] owns the configured alarm time and the runtime flags
//! (ringing, held on, snoozed). It is advanced by [`AlarmClock::tick`] once
//! per second and mutated synchronously by the user controls.
//!
//! The clock keeps an *armed* instant: the concrete date-time it is counting
//! down to. A freshly derived next occurrence is never in the past, so the
//! armed instant is what lets a tick observe `delta <= 0` and start ringing.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::alarm_time::AlarmTime;
use crate::brightness::{display_percent, BrightnessCalculator, Reading};
use crate::profile::GlowProfile;

/// Result of advancing the clock by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TickOutcome {
    pub reading: Reading,
    /// Ringing went from false to true on this tick
    pub started_ringing: bool,
}

#[derive(Debug, Clone)]
pub struct AlarmClock {
    calculator: BrightnessCalculator,
    alarm: AlarmTime,
    armed: Option<NaiveDateTime>,
    brightness: f64,
    ringing: bool,
    held_on: bool,
    snoozed: bool,
    /// Ringing suppressed by snooze or dismiss until the armed instant is reached
    silenced: bool,
    delta_secs: Option<f64>,
}

impl AlarmClock {
    pub fn new(profile: GlowProfile, alarm: AlarmTime) -> Self {
        let brightness = profile.min_brightness;
        Self {
            calculator: BrightnessCalculator::new(profile),
            alarm,
            armed: None,
            brightness,
            ringing: false,
            held_on: false,
            snoozed: false,
            silenced: false,
            delta_secs: None,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────

    pub fn profile(&self) -> &GlowProfile {
        self.calculator.profile()
    }

    pub fn alarm(&self) -> AlarmTime {
        self.alarm
    }

    pub fn armed_instant(&self) -> Option<NaiveDateTime> {
        self.armed
    }

    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    pub fn percent(&self) -> u8 {
        display_percent(self.brightness)
    }

    pub fn is_ringing(&self) -> bool {
        self.ringing
    }

    pub fn is_held_on(&self) -> bool {
        self.held_on
    }

    pub fn is_snoozed(&self) -> bool {
        self.snoozed
    }

    /// Seconds until the armed instant as of the last tick.
    pub fn delta_secs(&self) -> Option<f64> {
        self.delta_secs
    }

    /// Whether the STOP control applies (hold profiles with the light latched).
    pub fn can_stop(&self) -> bool {
        self.profile().hold_until_stopped && self.held_on
    }

    // ─────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────

    /// Recompute brightness and ringing for `now` and apply both.
    pub fn tick(&mut self, now: NaiveDateTime) -> TickOutcome {
        // Every alarm change clears or re-targets `armed`, so a set value is current.
        let alarm = self.alarm;
        let target = *self
            .armed
            .get_or_insert_with(|| alarm.next_occurrence(now));

        let mut reading = self.calculator.evaluate_at(now, target, self.held_on);
        if self.silenced {
            if reading.delta_secs <= 0.0 {
                self.silenced = false;
            } else {
                reading.ringing = false;
            }
        }
        let started_ringing = reading.ringing && !self.ringing;

        self.brightness = reading.brightness;
        self.ringing = reading.ringing;
        self.held_on = reading.held_on;
        self.delta_secs = Some(reading.delta_secs);
        if started_ringing {
            self.snoozed = false;
        }

        TickOutcome {
            reading,
            started_ringing,
        }
    }

    /// Replace the alarm time. Flags are left for the next tick to re-derive.
    ///
    /// Returns `false` when the time is unchanged.
    pub fn set_alarm_time(&mut self, alarm: AlarmTime) -> bool {
        if alarm == self.alarm {
            return false;
        }
        self.alarm = alarm;
        self.armed = None;
        self.snoozed = false;
        true
    }

    /// Push the alarm to `now + snooze`, truncated to the minute.
    ///
    /// A held light stays on; only [`AlarmClock::stop`] releases it.
    pub fn snooze(&mut self, now: NaiveDateTime) -> AlarmTime {
        let alarm = AlarmTime::offset_from(now, self.profile().snooze_delta());
        self.alarm = alarm;
        self.armed = None;
        self.ringing = false;
        self.snoozed = true;
        self.silence();
        alarm
    }

    /// Silence the alarm without changing the alarm time.
    ///
    /// Ringing stays suppressed until the time to alarm is positive again:
    /// the armed instant moves to the next occurrence strictly after `now`.
    /// A held light stays on.
    pub fn dismiss(&mut self, now: NaiveDateTime) {
        self.ringing = false;
        self.armed = Some(self.alarm.next_occurrence_after(now));
        self.silence();
    }

    /// Release a held light. No-op for profiles without hold.
    ///
    /// Returns `false` when nothing was stopped.
    pub fn stop(&mut self, now: NaiveDateTime) -> bool {
        if !self.profile().hold_until_stopped {
            return false;
        }
        self.ringing = false;
        self.held_on = false;
        self.silenced = false;
        self.armed = Some(self.alarm.next_occurrence_after(now));
        self.force_minimum();
        true
    }

    fn silence(&mut self) {
        self.silenced = true;
        if self.held_on {
            self.brightness = self.profile().max_brightness;
        } else {
            self.force_minimum();
        }
    }

    fn force_minimum(&mut self) {
        self.brightness = self.profile().min_brightness;
    }
}

impl Default for AlarmClock {
    fn default() -> Self {
        Self::new(GlowProfile::default(), AlarmTime::default())
    }
}
