//! glowrise-app - Application state and orchestration for Glow Rise
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the Engine that owns the ticker and message channel, and
//! configuration loading. It knows nothing about terminals.

pub mod clock;
pub mod config;
pub mod editor;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod ticker;

// Re-export primary types
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{CliOverrides, ResolvedConfig, Settings};
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, UiMode};
