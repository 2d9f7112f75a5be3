//! Message processing
//!
//! Runs a message and all of its follow-up messages through the TEA update
//! function, collecting the actions the engine should report.

use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);
        if let Some(action) = result.action {
            actions.push(action);
        }
        msg = result.message;
    }
    actions
}
