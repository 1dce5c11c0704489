//! Launchpad Terminal library
//!
//! Terminal client for a launchpad project detail page. The binary wires the
//! CLI to one of two front ends over the same engine: the ratatui page or
//! headless NDJSON output.

pub mod headless;

use std::sync::Arc;

use launchpad_app::config::Settings;
use launchpad_app::Engine;
use launchpad_chain::ChainDataSource;
use launchpad_core::prelude::*;

pub use headless::runner::{run_headless, run_headless_with_engine};

/// Install error reporting and the file logger
pub fn init() -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Log to file, since the TUI owns stdout
    launchpad_core::logging::init()?;
    Ok(())
}

/// Run the terminal page for `route` against the live chain
pub async fn run_with_route(route: &str, settings: Settings) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Launchpad terminal starting");
    info!("Route: {}", route);
    info!("═══════════════════════════════════════════════════════");

    let source = ChainDataSource::new(&settings.chain_config())?;
    let engine = Engine::new(settings, Arc::new(source));

    let result = launchpad_tui::run(engine, route).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Launchpad terminal exiting");
    result
}
