//! Test utilities for TUI rendering verification
//!
//! Widgets are rendered into ratatui's `TestBackend` and asserted on the
//! resulting buffer text.

use chrono::{NaiveDate, NaiveDateTime};
use glowrise_app::state::AppState;
use glowrise_core::{AlarmTime, GlowProfile, Preset};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Compact terminal for testing responsive layouts
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

/// Wrapper around a `TestBackend` terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. with [`crate::render::view`].
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    pub fn cell_at(&self, x: u16, y: u16) -> Option<&str> {
        let buffer = self.buffer();
        if x < buffer.area.width && y < buffer.area.height {
            Some(buffer[(x, y)].symbol())
        } else {
            None
        }
    }

    /// All content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// A fixed wall-clock instant on a fixed test day.
pub fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 14)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

/// State with the alarm at 06:30 and no tick processed yet.
pub fn test_state(preset: Preset, now: NaiveDateTime) -> AppState {
    AppState::new(
        GlowProfile::from_preset(preset),
        preset,
        AlarmTime::new(6, 30).unwrap(),
        now,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_sizes() {
        assert_eq!(TestTerminal::new().area(), Rect::new(0, 0, 80, 24));
        assert_eq!(TestTerminal::compact().area(), Rect::new(0, 0, 40, 12));
    }

    #[test]
    fn test_line_and_cell_lookup() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("AB\nCD"), term.area());

        assert!(term.line_contains(1, "CD"));
        assert!(!term.line_contains(0, "CD"));
        assert_eq!(term.cell_at(0, 0), Some("A"));
        assert_eq!(term.cell_at(100, 100), None);
    }

    #[test]
    fn test_state_starts_untouched() {
        let state = test_state(Preset::Quick, at(6, 0, 0));
        assert!(state.reading.is_none());
        assert_eq!(state.alarm_clock.alarm().to_string(), "06:30");
    }
}
