//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use glowrise_app::message::Message;
use glowrise_app::InputKey;
use glowrise_core::prelude::*;
use std::time::Duration;

/// Redraw cadence while idle (20 FPS keeps the halo pulse smooth)
pub const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        _ => None,
    }
}

/// Poll for a key press.
///
/// Returns `None` on timeout. Clock ticks come from the engine's ticker,
/// not from here.
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_TIMEOUT)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        _ => Ok(None),
    }
}
