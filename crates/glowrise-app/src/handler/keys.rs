//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::EditingAlarm => handle_key_editing_alarm(key),
    }
}

/// Alarm controls only map while they would be shown on screen.
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    let clock = &state.alarm_clock;
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),

        InputKey::Char('e') | InputKey::Enter => Some(Message::StartEditAlarm),

        InputKey::Char('s') if clock.is_ringing() => Some(Message::Snooze),
        InputKey::Char('d') if clock.is_ringing() => Some(Message::Dismiss),
        InputKey::Char('x' | ' ') if clock.can_stop() => Some(Message::Stop),

        _ => None,
    }
}

fn handle_key_editing_alarm(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char(c) if c.is_ascii_digit() || c == ':' => Some(Message::EditAlarmInput(c)),
        InputKey::Backspace => Some(Message::EditAlarmBackspace),
        InputKey::Up => Some(Message::EditAlarmNudge(1)),
        InputKey::Down => Some(Message::EditAlarmNudge(-1)),
        InputKey::Enter => Some(Message::CommitAlarmEdit),
        InputKey::Esc => Some(Message::CancelAlarmEdit),
        _ => None,
    }
}
