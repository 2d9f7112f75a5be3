//! # glowrise-core - Core Domain Types
//!
//! Foundation crate for Glow Rise. Provides the alarm domain (alarm time,
//! glow profiles, the brightness calculator and the alarm clock state
//! machine), error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Alarm Domain
//! - [`AlarmTime`] - Hour and minute the alarm fires at, reinterpreted daily
//! - [`GlowProfile`], [`Preset`], [`Palette`] - Per-variant glow constants
//! - [`BrightnessCalculator`], [`brightness_for_delta()`] - Time-to-alarm to brightness
//! - [`AlarmClock`] - Ringing/held/snoozed state machine driven by ticks
//!
//! ### Appearance (`appearance`)
//! - [`BulbTone`], [`Sleeper`] - Brightness-derived visual states
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use glowrise_core::prelude::*;
//! ```

pub mod alarm_clock;
pub mod alarm_time;
pub mod appearance;
pub mod brightness;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod profile;

use chrono::NaiveDateTime;

pub use alarm_clock::{AlarmClock, TickOutcome};
pub use alarm_time::{AlarmTime, DEFAULT_ALARM_TIME};
pub use appearance::{BulbTone, Sleeper};
pub use brightness::{
    brightness_for_delta, display_percent, seconds_until, BrightnessCalculator, Reading,
};
pub use error::{Error, Result, ResultExt};
pub use profile::{GlowProfile, Palette, Preset};

/// Format a wall-clock instant as a zero-padded `HH:MM:SS` digital clock.
pub fn format_clock(now: NaiveDateTime) -> String {
    now.format("%H:%M:%S").to_string()
}
