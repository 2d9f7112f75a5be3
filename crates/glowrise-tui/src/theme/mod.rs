//! Centralized theme for the bedroom scene and control panel.
//!
//! This module provides:
//! - `palette` - Raw color constants and brightness-driven colors
//! - `styles` - Semantic style builder functions

pub mod palette;
pub mod styles;
