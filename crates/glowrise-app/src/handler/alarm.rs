//! Alarm control and alarm editor handlers

use glowrise_core::AlarmTime;
use tracing::{debug, info, warn};

use crate::message::Message;
use crate::state::{AppState, UiMode};

use super::{UpdateAction, UpdateResult};

/// Re-evaluate the alarm clock at `state.now`.
pub fn handle_tick(state: &mut AppState) -> UpdateResult {
    let outcome = state.alarm_clock.tick(state.now);
    state.reading = Some(outcome.reading);

    if outcome.started_ringing {
        let alarm = state.alarm_clock.alarm();
        info!("Alarm {} ringing at {}", alarm, state.now);
        UpdateResult::action(UpdateAction::RingingStarted {
            alarm,
            at: state.now,
        })
    } else {
        UpdateResult::none()
    }
}

pub fn handle_set_alarm_time(state: &mut AppState, time: AlarmTime) -> UpdateResult {
    if !state.alarm_clock.set_alarm_time(time) {
        debug!("Alarm time unchanged ({})", time);
        return UpdateResult::none();
    }
    info!("Alarm time set to {}", time);
    UpdateResult::with_message(
        UpdateAction::AlarmTimeChanged { alarm: time },
        Message::Refresh,
    )
}

pub fn handle_snooze(state: &mut AppState) -> UpdateResult {
    if !state.alarm_clock.is_ringing() {
        debug!("Snooze ignored: alarm not ringing");
        return UpdateResult::none();
    }
    let until = state.alarm_clock.snooze(state.now);
    info!("Snoozed until {}", until);
    UpdateResult::with_message(UpdateAction::Snoozed { until }, Message::Refresh)
}

pub fn handle_dismiss(state: &mut AppState) -> UpdateResult {
    if !state.alarm_clock.is_ringing() {
        debug!("Dismiss ignored: alarm not ringing");
        return UpdateResult::none();
    }
    state.alarm_clock.dismiss(state.now);
    let alarm = state.alarm_clock.alarm();
    info!("Alarm dismissed, next at {}", alarm);
    UpdateResult::with_message(UpdateAction::Dismissed { alarm }, Message::Refresh)
}

pub fn handle_stop(state: &mut AppState) -> UpdateResult {
    if !state.alarm_clock.can_stop() {
        debug!("Stop ignored: light not held on");
        return UpdateResult::none();
    }
    if !state.alarm_clock.stop(state.now) {
        return UpdateResult::none();
    }
    info!("Light stopped");
    UpdateResult::with_message(UpdateAction::Stopped, Message::Refresh)
}

// ─────────────────────────────────────────────────────────
// Editor
// ─────────────────────────────────────────────────────────

pub fn handle_start_edit(state: &mut AppState) -> UpdateResult {
    state.alarm_editor.begin(state.alarm_clock.alarm());
    state.ui_mode = UiMode::EditingAlarm;
    UpdateResult::none()
}

pub fn handle_edit_input(state: &mut AppState, c: char) -> UpdateResult {
    if state.is_editing_alarm() {
        state.alarm_editor.input(c);
    }
    UpdateResult::none()
}

pub fn handle_edit_backspace(state: &mut AppState) -> UpdateResult {
    if state.is_editing_alarm() {
        state.alarm_editor.backspace();
    }
    UpdateResult::none()
}

pub fn handle_edit_nudge(state: &mut AppState, minutes: i64) -> UpdateResult {
    if state.is_editing_alarm() {
        let current = state.alarm_clock.alarm();
        state.alarm_editor.nudge(minutes, current);
    }
    UpdateResult::none()
}

pub fn handle_commit_edit(state: &mut AppState) -> UpdateResult {
    if !state.is_editing_alarm() {
        return UpdateResult::none();
    }
    match state.alarm_editor.commit() {
        Ok(time) => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::message(Message::SetAlarmTime(time))
        }
        Err(e) => {
            warn!("Rejected alarm time: {}", e);
            UpdateResult::none()
        }
    }
}

pub fn handle_cancel_edit(state: &mut AppState) -> UpdateResult {
    state.alarm_editor.clear();
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}
