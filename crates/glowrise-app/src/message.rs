//! Message types for the application (TEA pattern)

use chrono::NaiveDateTime;
use glowrise_core::AlarmTime;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from the terminal
    Key(InputKey),

    /// Once-per-second wall clock reading from the ticker
    Tick { now: NaiveDateTime },

    /// Re-evaluate brightness at the last observed time without waiting for a tick
    Refresh,

    /// Request to quit (asks for a second press while the light is on)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C, signal handler, stdin EOF)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Alarm Controls
    // ─────────────────────────────────────────────────────────
    /// Replace the alarm time of day
    SetAlarmTime(AlarmTime),

    /// Push the alarm out by the snooze length (only while ringing)
    Snooze,

    /// Silence the alarm until its next daily occurrence (only while ringing)
    Dismiss,

    /// Release a held light (only while held on)
    Stop,

    // ─────────────────────────────────────────────────────────
    // Alarm Editor
    // ─────────────────────────────────────────────────────────
    StartEditAlarm,
    EditAlarmInput(char),
    EditAlarmBackspace,
    /// Move the edited time by whole minutes (arrow keys)
    EditAlarmNudge(i64),
    CommitAlarmEdit,
    CancelAlarmEdit,
}
