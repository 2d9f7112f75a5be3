//! In-place editor for the alarm time of day
//!
//! Holds the `HH:MM` text while the user types. The buffer is only parsed on
//! commit, so partial input such as `7:` is allowed while editing.

use glowrise_core::prelude::*;
use glowrise_core::AlarmTime;

const MAX_LEN: usize = 5;

/// Text buffer behind the alarm picker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlarmEditor {
    buffer: String,
    /// Next typed digit replaces the whole buffer (set right after opening)
    replace_on_type: bool,
    error: Option<String>,
}

impl AlarmEditor {
    /// Start editing, pre-filled with the current alarm time.
    pub fn begin(&mut self, current: AlarmTime) {
        self.buffer = current.to_string();
        self.replace_on_type = true;
        self.error = None;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Accept a digit or `:`; anything else is ignored.
    pub fn input(&mut self, c: char) {
        if !(c.is_ascii_digit() || c == ':') {
            return;
        }
        if self.replace_on_type {
            self.buffer.clear();
            self.replace_on_type = false;
        }
        self.error = None;

        if c == ':' && self.buffer.contains(':') {
            return;
        }
        // "07" followed by a digit reads as "07:<digit>"
        if c.is_ascii_digit() && self.buffer.len() == 2 && !self.buffer.contains(':') {
            self.buffer.push(':');
        }
        if self.buffer.len() < MAX_LEN {
            self.buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.replace_on_type = false;
        self.error = None;
        self.buffer.pop();
    }

    /// Shift the edited time by `minutes`, starting from `fallback` when the
    /// buffer does not parse yet.
    pub fn nudge(&mut self, minutes: i64, fallback: AlarmTime) {
        let base = self.buffer.parse::<AlarmTime>().unwrap_or(fallback);
        self.buffer = base.plus_minutes(minutes).to_string();
        self.replace_on_type = false;
        self.error = None;
    }

    /// Parse the buffer. On failure the error is kept for display.
    pub fn commit(&mut self) -> Result<AlarmTime> {
        match self.buffer.parse::<AlarmTime>() {
            Ok(time) => {
                self.clear();
                Ok(time)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
