//! launchpad-app - Application state and orchestration for the launchpad terminal
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! project detail page, the Engine abstraction shared by the TUI and headless
//! runners, and configuration loading.

pub mod actions;
pub mod config;
pub mod dialog;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod page;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use dialog::{CloseGesture, DialogBody, DialogLayout, ImageDialog, ImageDialogState};
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use message::Message;
pub use page::{PageTab, ProjectPage, SourceKind};
pub use state::AppState;
