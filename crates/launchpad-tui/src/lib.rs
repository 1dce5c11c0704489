//! launchpad-tui - Terminal UI for the launchpad terminal
//!
//! Renders the project detail page with ratatui. The [`Engine`] from
//! launchpad-app owns state and fetching; this crate adds event polling,
//! layout, and the page widgets.
//!
//! [`Engine`]: launchpad_app::Engine

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
