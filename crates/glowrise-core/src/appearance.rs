//! Brightness-derived appearance of the bulb, the room and the sleeper
//!
//! Front ends turn these values into colors and glyphs; nothing here knows
//! about a particular rendering library.

use serde::Serialize;

/// Pulse half-period of the outer glow.
pub const PULSE_PERIOD_MS: u64 = 1500;
const PULSE_DIM: f64 = 0.6;
const PULSE_BRIGHT: f64 = 1.0;

/// Bulb color band for a brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BulbTone {
    /// Below 30%: glass looks unlit
    Off,
    /// 30% to 60%
    DimWarm,
    /// 60% to 85%
    MediumGlow,
    /// 85% and above
    BrightWarm,
}

impl BulbTone {
    pub fn from_brightness(brightness: f64) -> Self {
        if brightness < 30.0 {
            BulbTone::Off
        } else if brightness < 60.0 {
            BulbTone::DimWarm
        } else if brightness < 85.0 {
            BulbTone::MediumGlow
        } else {
            BulbTone::BrightWarm
        }
    }
}

/// Glow intensity in `0.0..=1.0`.
pub fn glow_intensity(brightness: f64) -> f64 {
    (brightness / 100.0).clamp(0.0, 1.0)
}

/// Halo reach in cells around the bulb for a given maximum reach.
pub fn halo_radius(brightness: f64, max_radius: u16) -> u16 {
    (glow_intensity(brightness) * f64::from(max_radius)).round() as u16
}

/// Filament opacity, present only above 50% brightness.
pub fn filament_opacity(brightness: f64) -> Option<f64> {
    (brightness > 50.0).then(|| ((brightness - 50.0) / 50.0).min(1.0))
}

/// Outer glow opacity, alternating every [`PULSE_PERIOD_MS`].
pub fn pulse_opacity(elapsed_ms: u64) -> f64 {
    if (elapsed_ms / PULSE_PERIOD_MS) % 2 == 0 {
        PULSE_DIM
    } else {
        PULSE_BRIGHT
    }
}

/// Room background lightness (percent) at the top and bottom of the scene.
pub fn room_lightness(brightness: f64) -> (f64, f64) {
    (10.0 + brightness / 5.0, 5.0 + brightness / 10.0)
}

/// How awake the sleeping figure looks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sleeper {
    /// `0.0` eyes shut, `1.0` wide open
    pub eye_openness: f64,
}

impl Sleeper {
    pub fn from_brightness(brightness: f64) -> Self {
        Self {
            eye_openness: glow_intensity(brightness),
        }
    }

    pub fn pupils_visible(&self) -> bool {
        self.eye_openness > 0.3
    }

    pub fn drowsy(&self) -> bool {
        self.eye_openness < 0.5
    }

    pub fn smiling(&self) -> bool {
        self.eye_openness > 0.7
    }
}
