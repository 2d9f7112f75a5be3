//! Semantic style builders shared by the widgets.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Key hints ---

/// Highlighted key in a `[k] Label` hint
pub fn key_hint() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Buttons ---

/// Solid red STOP banner
pub fn stop_button() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .bg(palette::STATUS_RED)
        .add_modifier(Modifier::BOLD)
}

pub fn snooze_button() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::STATUS_YELLOW)
        .add_modifier(Modifier::BOLD)
}

pub fn dismiss_button() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .bg(palette::STATUS_GREEN)
        .add_modifier(Modifier::BOLD)
}

pub fn error_hint() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}
