//! Glow profiles
//!
//! A [`GlowProfile`] bundles the constants that distinguish one wake-up
//! light variant from another: how long before the alarm the bulb starts
//! glowing, the brightness range, whether the light latches on until an
//! explicit stop, the snooze length and the color palette.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_MIN_BRIGHTNESS: f64 = 5.0;
pub const DEFAULT_MAX_BRIGHTNESS: f64 = 100.0;
pub const DEFAULT_SNOOZE: Duration = Duration::from_secs(5 * 60);
pub const QUICK_PRE_GLOW: Duration = Duration::from_secs(30);
pub const SUNRISE_PRE_GLOW: Duration = Duration::from_secs(30 * 60);
/// Upper bound for both the pre-glow window and the snooze length
pub const MAX_PROFILE_SPAN: Duration = Duration::from_secs(24 * 60 * 60);

/// Named bundles of glow constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// 30 second ramp, light held on after the alarm until stopped
    #[default]
    Quick,
    /// 30 minute ramp, light held on after the alarm until stopped
    Sunrise,
    /// 30 second ramp, no hold: snooze or dismiss only
    Classic,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Quick, Preset::Sunrise, Preset::Classic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Quick => "quick",
            Preset::Sunrise => "sunrise",
            Preset::Classic => "classic",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Preset::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::config(format!(
                    "unknown preset '{s}' (expected quick, sunrise or classic)"
                ))
            })
    }
}

/// Color ramp used to paint the bulb and the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    /// Warm white to deep amber
    #[default]
    Amber,
    /// Yellow through orange to a red-gold glow
    Sunrise,
}

/// Constants for one wake-up light variant.
#[derive(Debug, Clone, PartialEq)]
pub struct GlowProfile {
    /// Ramp length before the alarm instant
    pub pre_glow_window: Duration,
    pub min_brightness: f64,
    pub max_brightness: f64,
    /// Keep the light at full brightness after the alarm until stopped
    pub hold_until_stopped: bool,
    pub snooze: Duration,
    pub palette: Palette,
}

impl GlowProfile {
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Quick => Self {
                pre_glow_window: QUICK_PRE_GLOW,
                min_brightness: DEFAULT_MIN_BRIGHTNESS,
                max_brightness: DEFAULT_MAX_BRIGHTNESS,
                hold_until_stopped: true,
                snooze: DEFAULT_SNOOZE,
                palette: Palette::Amber,
            },
            Preset::Sunrise => Self {
                pre_glow_window: SUNRISE_PRE_GLOW,
                min_brightness: DEFAULT_MIN_BRIGHTNESS,
                max_brightness: DEFAULT_MAX_BRIGHTNESS,
                hold_until_stopped: true,
                snooze: DEFAULT_SNOOZE,
                palette: Palette::Sunrise,
            },
            Preset::Classic => Self {
                pre_glow_window: QUICK_PRE_GLOW,
                min_brightness: DEFAULT_MIN_BRIGHTNESS,
                max_brightness: DEFAULT_MAX_BRIGHTNESS,
                hold_until_stopped: false,
                snooze: DEFAULT_SNOOZE,
                palette: Palette::Amber,
            },
        }
    }

    pub fn window_secs(&self) -> f64 {
        self.pre_glow_window.as_secs_f64()
    }

    /// Snooze length as a chrono duration for wall-clock arithmetic.
    pub fn snooze_delta(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.snooze).unwrap_or_else(|_| chrono::Duration::minutes(5))
    }

    /// Check the invariants the brightness calculator relies on.
    pub fn validate(&self) -> Result<()> {
        if self.pre_glow_window.is_zero() {
            return Err(Error::config_invalid("pre-glow window must be positive"));
        }
        if self.pre_glow_window > MAX_PROFILE_SPAN {
            return Err(Error::config_invalid("pre-glow window must not exceed 24 hours"));
        }
        if !(0.0..=100.0).contains(&self.min_brightness)
            || !(0.0..=100.0).contains(&self.max_brightness)
        {
            return Err(Error::config_invalid(
                "brightness bounds must lie within 0..=100",
            ));
        }
        if self.min_brightness >= self.max_brightness {
            return Err(Error::config_invalid(format!(
                "min_brightness ({}) must be below max_brightness ({})",
                self.min_brightness, self.max_brightness
            )));
        }
        if self.snooze < Duration::from_secs(60) {
            return Err(Error::config_invalid("snooze must be at least one minute"));
        }
        if self.snooze > MAX_PROFILE_SPAN {
            return Err(Error::config_invalid("snooze must not exceed 24 hours"));
        }
        Ok(())
    }
}

impl Default for GlowProfile {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_differ_in_window_and_hold() {
        let quick = GlowProfile::from_preset(Preset::Quick);
        let sunrise = GlowProfile::from_preset(Preset::Sunrise);
        let classic = GlowProfile::from_preset(Preset::Classic);

        assert_eq!(quick.window_secs(), 30.0);
        assert_eq!(sunrise.window_secs(), 1800.0);
        assert!(quick.hold_until_stopped);
        assert!(!classic.hold_until_stopped);
    }

    #[test]
    fn test_all_presets_validate() {
        for preset in Preset::ALL {
            assert!(GlowProfile::from_preset(preset).validate().is_ok());
        }
    }

    #[test]
    fn test_preset_parse_is_case_insensitive() {
        assert_eq!("Sunrise".parse::<Preset>().unwrap(), Preset::Sunrise);
        assert_eq!(" classic ".parse::<Preset>().unwrap(), Preset::Classic);
        assert!("disco".parse::<Preset>().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let profile = GlowProfile {
            min_brightness: 80.0,
            max_brightness: 20.0,
            ..GlowProfile::default()
        };
        assert!(matches!(
            profile.validate(),
            Err(Error::ConfigInvalid { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_window() {
        let profile = GlowProfile {
            pre_glow_window: Duration::ZERO,
            ..GlowProfile::default()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_short_snooze() {
        let profile = GlowProfile {
            snooze: Duration::from_secs(10),
            ..GlowProfile::default()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_spans_over_a_day() {
        let long_snooze = GlowProfile {
            snooze: MAX_PROFILE_SPAN + Duration::from_secs(60),
            ..GlowProfile::default()
        };
        assert!(matches!(
            long_snooze.validate(),
            Err(Error::ConfigInvalid { .. })
        ));

        let long_window = GlowProfile {
            pre_glow_window: Duration::from_secs(u64::MAX),
            ..GlowProfile::default()
        };
        assert!(long_window.validate().is_err());

        let full_day = GlowProfile {
            pre_glow_window: MAX_PROFILE_SPAN,
            snooze: MAX_PROFILE_SPAN,
            ..GlowProfile::default()
        };
        assert!(full_day.validate().is_ok());
    }

    #[test]
    fn test_snooze_delta_is_five_minutes() {
        assert_eq!(
            GlowProfile::default().snooze_delta(),
            chrono::Duration::minutes(5)
        );
    }
}
