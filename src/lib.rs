//! Glow Rise - a wake-up light alarm clock for the terminal
//!
//! The binary picks between the ratatui front end in `glowrise-tui` and the
//! NDJSON headless runner defined here.

pub mod headless;

pub use glowrise_tui::run as run_tui;
pub use headless::runner::run_headless;
