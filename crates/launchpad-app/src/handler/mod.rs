//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for the page and the dialog

pub(crate) mod keys;
pub(crate) mod update;


use crate::message::Message;
use crate::page::{FetchRequest, LoadTransition, PageEffect};

pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Issue these source fetches concurrently
    Fetch(Vec<FetchRequest>),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
    /// Aggregate loading change the message caused on the page
    pub transition: LoadTransition,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            ..Self::default()
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            action: Some(action),
            ..Self::default()
        }
    }

    /// Dispatch the effect's requests, if it has any, and report its
    /// loading transition
    pub(crate) fn from_effect(effect: PageEffect) -> Self {
        let action = if effect.requests.is_empty() {
            None
        } else {
            Some(UpdateAction::Fetch(effect.requests))
        };
        Self {
            message: None,
            action,
            transition: effect.transition,
        }
    }
}
