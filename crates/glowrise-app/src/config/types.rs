//! Configuration types for Glow Rise
//!
//! Defines:
//! - `Settings` - Contents of `config.toml`
//! - `CliOverrides` - Values given on the command line
//! - `ResolvedConfig` - The merged, validated result the engine runs with

use glowrise_core::{AlarmTime, GlowProfile, Palette, Preset};
use serde::{Deserialize, Serialize};

/// Global application settings from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub alarm: AlarmSettings,
    pub glow: GlowSettings,
}

/// `[alarm]` section
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AlarmSettings {
    /// Time of day in 24-hour `HH:MM`
    pub time: AlarmTime,
}

/// `[glow]` section. Unset fields fall back to the preset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GlowSettings {
    pub preset: Preset,

    /// Pre-glow ramp length in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_secs: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_brightness: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_brightness: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold_until_stopped: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub snooze_minutes: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<Palette>,
}

/// Values given on the command line; these win over the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub alarm: Option<AlarmTime>,
    pub preset: Option<Preset>,
    pub window_secs: Option<u64>,
}

/// Merged configuration the engine starts with
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub alarm: AlarmTime,
    pub preset: Preset,
    pub profile: GlowProfile,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let preset = Preset::default();
        Self {
            alarm: AlarmTime::default(),
            preset,
            profile: GlowProfile::from_preset(preset),
        }
    }
}
