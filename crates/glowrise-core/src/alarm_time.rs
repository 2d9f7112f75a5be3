//! Alarm time of day
//!
//! An [`AlarmTime`] is an hour and minute with no date attached. It is
//! re-anchored against "now" every time the alarm is evaluated, so the same
//! value fires once per day.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Alarm time used when nothing else is configured.
pub const DEFAULT_ALARM_TIME: AlarmTime = AlarmTime {
    hour: 6,
    minute: 30,
};

/// Hour and minute at which the alarm triggers, reinterpreted daily.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AlarmTime {
    hour: u8,
    minute: u8,
}

impl AlarmTime {
    /// Create an alarm time, rejecting out-of-range components.
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(Error::invalid_alarm_time(format!("{hour}:{minute}")));
        }
        Ok(Self { hour, minute })
    }

    /// Build from a wall-clock time, dropping seconds and sub-seconds.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        // chrono guarantees hour < 24 and minute < 60
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour.into(), self.minute.into(), 0).unwrap_or(NaiveTime::MIN)
    }

    /// The alarm instant on the same calendar day as `now`.
    pub fn on_day_of(self, now: NaiveDateTime) -> NaiveDateTime {
        now.date().and_time(self.to_naive_time())
    }

    /// Next time this time of day occurs at or after `now`.
    ///
    /// If today's occurrence is already in the past the instant rolls over
    /// to tomorrow. An occurrence equal to `now` is returned as-is.
    pub fn next_occurrence(self, now: NaiveDateTime) -> NaiveDateTime {
        let today = self.on_day_of(now);
        if today < now {
            today + Duration::days(1)
        } else {
            today
        }
    }

    /// Next time this time of day occurs strictly after `now`.
    pub fn next_occurrence_after(self, now: NaiveDateTime) -> NaiveDateTime {
        let next = self.next_occurrence(now);
        if next == now {
            next + Duration::days(1)
        } else {
            next
        }
    }

    /// `now + offset`, truncated to minute resolution.
    pub fn offset_from(now: NaiveDateTime, offset: Duration) -> Self {
        Self::from_naive_time((now + offset).time())
    }

    /// Shift by whole minutes, wrapping around midnight.
    pub fn plus_minutes(self, minutes: i64) -> Self {
        let (time, _) = self
            .to_naive_time()
            .overflowing_add_signed(Duration::minutes(minutes));
        Self::from_naive_time(time)
    }
}

impl Default for AlarmTime {
    fn default() -> Self {
        DEFAULT_ALARM_TIME
    }
}

impl fmt::Display for AlarmTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for AlarmTime {
    type Err = Error;

    /// Parse `HH:MM` in 24-hour notation.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        NaiveTime::parse_from_str(trimmed, "%H:%M")
            .map(Self::from_naive_time)
            .map_err(|_| Error::invalid_alarm_time(trimmed))
    }
}

impl TryFrom<String> for AlarmTime {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<AlarmTime> for String {
    fn from(value: AlarmTime) -> Self {
        value.to_string()
    }
}
