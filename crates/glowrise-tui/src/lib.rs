//! glowrise-tui - Terminal UI for Glow Rise
//!
//! Creates an Engine from glowrise-app and adds terminal rendering, key
//! polling and the bedroom scene widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
