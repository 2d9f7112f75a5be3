//! Brightness over time
//!
//! Maps the time remaining until the alarm onto a bulb brightness and a
//! ringing flag. Everything here is a pure function of its inputs; callers
//! apply both the brightness and the ringing/held side channel.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::alarm_time::AlarmTime;
use crate::profile::GlowProfile;

/// Output of one brightness evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reading {
    /// Brightness percentage with fractional precision, within the profile bounds
    pub brightness: f64,
    pub ringing: bool,
    /// Light latched on until an explicit stop
    pub held_on: bool,
    /// Seconds until the alarm instant; zero or negative once reached
    pub delta_secs: f64,
}

impl Reading {
    /// Brightness rounded for display.
    pub fn percent(&self) -> u8 {
        display_percent(self.brightness)
    }
}

/// Round a brightness to the integer shown to the user (52.5 -> 53).
pub fn display_percent(brightness: f64) -> u8 {
    brightness.round().clamp(0.0, 100.0) as u8
}

/// Signed seconds from `now` to `target`, millisecond precision.
pub fn seconds_until(now: NaiveDateTime, target: NaiveDateTime) -> f64 {
    (target - now).num_milliseconds() as f64 / 1000.0
}

/// Transition table from time-to-alarm onto brightness.
///
/// Evaluated in order: a held light stays at maximum and ringing; a reached
/// alarm (`delta <= 0`) goes to maximum, rings, and latches when the profile
/// holds; anything further out than the pre-glow window sits at minimum;
/// inside the window brightness ramps linearly from minimum to maximum.
pub fn brightness_for_delta(delta_secs: f64, profile: &GlowProfile, held_on: bool) -> Reading {
    let min = profile.min_brightness;
    let max = profile.max_brightness;
    let window = profile.window_secs();

    let (brightness, ringing, held_on) = if held_on {
        (max, true, true)
    } else if delta_secs <= 0.0 {
        (max, true, profile.hold_until_stopped)
    } else if delta_secs > window {
        (min, false, false)
    } else {
        let progress = 1.0 - delta_secs / window;
        (min + progress * (max - min), false, false)
    };

    Reading {
        brightness,
        ringing,
        held_on,
        delta_secs,
    }
}

/// Pure brightness evaluation for a fixed profile.
#[derive(Debug, Clone)]
pub struct BrightnessCalculator {
    profile: GlowProfile,
}

impl BrightnessCalculator {
    pub fn new(profile: GlowProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &GlowProfile {
        &self.profile
    }

    /// Evaluate against a concrete alarm instant, which may be in the past.
    pub fn evaluate_at(&self, now: NaiveDateTime, target: NaiveDateTime, held_on: bool) -> Reading {
        brightness_for_delta(seconds_until(now, target), &self.profile, held_on)
    }

    /// Evaluate against the next occurrence of `alarm` (day rollover applied).
    pub fn evaluate(&self, now: NaiveDateTime, alarm: AlarmTime, held_on: bool) -> Reading {
        self.evaluate_at(now, alarm.next_occurrence(now), held_on)
    }
}
