//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary,
//! so the alarm engine and headless mode never depend on a terminal crate.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (letters, digits, `:` and space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c)
    CharCtrl(char),

    Up,
    Down,

    Enter,
    Esc,
    Backspace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('s'), InputKey::Char('s'));
        assert_ne!(InputKey::Char('s'), InputKey::Char('d'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }

    #[test]
    fn test_input_key_is_copy() {
        let key = InputKey::Up;
        let copied = key;
        assert_eq!(key, copied);
    }
}
