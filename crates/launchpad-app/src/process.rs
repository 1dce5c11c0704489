//! Message processing
//!
//! Runs a message and its follow-ups through the TEA update function and
//! dispatches any resulting actions.

use std::sync::Arc;

use tokio::sync::mpsc;

use launchpad_chain::LaunchpadData;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::page::LoadTransition;
use crate::state::AppState;

/// Process a message through the TEA update function.
///
/// Returns the loading transitions the message and its follow-ups caused,
/// in order, with `Unchanged` results left out.
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    source: &Arc<S>,
) -> Vec<LoadTransition>
where
    S: LaunchpadData + Send + Sync + 'static,
{
    let mut transitions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if result.transition != LoadTransition::Unchanged {
            transitions.push(result.transition);
        }

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), source.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
    transitions
}
