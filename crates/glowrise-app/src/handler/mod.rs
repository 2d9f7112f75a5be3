//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `alarm`: Alarm control and alarm editor handlers
//! - `keys`: Key event handlers for UI modes

pub(crate) mod alarm;
pub(crate) mod keys;
pub(crate) mod update;


use chrono::NaiveDateTime;
use glowrise_core::AlarmTime;

use crate::message::Message;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Notable transitions the engine reports to its subscribers
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Ringing went from off to on
    RingingStarted { alarm: AlarmTime, at: NaiveDateTime },

    /// Alarm pushed out by the snooze length
    Snoozed { until: AlarmTime },

    /// Ringing silenced until the next daily occurrence
    Dismissed { alarm: AlarmTime },

    /// Held light released
    Stopped,

    /// Alarm time replaced by the user
    AlarmTimeChanged { alarm: AlarmTime },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Report `action` and then process `msg`.
    pub fn with_message(action: UpdateAction, msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: Some(action),
        }
    }
}
