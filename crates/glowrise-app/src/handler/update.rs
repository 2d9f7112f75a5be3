//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{alarm, keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    if abandons_quit_confirmation(&message) {
        state.cancel_quit();
    }

    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick { now } => {
            state.now = now;
            alarm::handle_tick(state)
        }

        Message::Refresh => alarm::handle_tick(state),

        // ─────────────────────────────────────────────────────────
        // Alarm Controls
        // ─────────────────────────────────────────────────────────
        Message::SetAlarmTime(time) => alarm::handle_set_alarm_time(state, time),
        Message::Snooze => alarm::handle_snooze(state),
        Message::Dismiss => alarm::handle_dismiss(state),
        Message::Stop => alarm::handle_stop(state),

        // ─────────────────────────────────────────────────────────
        // Alarm Editor
        // ─────────────────────────────────────────────────────────
        Message::StartEditAlarm => alarm::handle_start_edit(state),
        Message::EditAlarmInput(c) => alarm::handle_edit_input(state, c),
        Message::EditAlarmBackspace => alarm::handle_edit_backspace(state),
        Message::EditAlarmNudge(minutes) => alarm::handle_edit_nudge(state, minutes),
        Message::CommitAlarmEdit => alarm::handle_commit_edit(state),
        Message::CancelAlarmEdit => alarm::handle_cancel_edit(state),
    }
}

/// Ticks and raw keys pass through; anything the user actually asked for
/// other than quitting takes precedence over a pending confirmation.
fn abandons_quit_confirmation(message: &Message) -> bool {
    !matches!(
        message,
        Message::Tick { .. }
            | Message::Refresh
            | Message::Key(_)
            | Message::RequestQuit
            | Message::Quit
    )
}
