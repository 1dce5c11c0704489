//! Main TUI runner - entry point and event loop

use std::time::Duration;

use launchpad_app::{Engine, Message};
use launchpad_chain::LaunchpadData;
use launchpad_core::prelude::*;

use super::{event, render, terminal};

/// Run the project page in the terminal until the user quits
pub async fn run<S>(mut engine: Engine<S>, route: &str) -> Result<()>
where
    S: LaunchpadData + Send + Sync + 'static,
{
    terminal::install_panic_hook();

    let mut term = ratatui::init();

    // Layout decisions need the real size before the first frame
    match term.size() {
        Ok(size) => engine.process_message(Message::Resize {
            width: size.width,
            height: size.height,
        }),
        Err(e) => warn!("Failed to read terminal size: {}", e),
    }

    engine.navigate(route);

    let tick_rate = Duration::from_millis(engine.state.settings.ui.tick_rate_ms);
    let result = run_loop(&mut term, &mut engine, tick_rate);

    engine.shutdown().await;
    ratatui::restore();

    result
}

fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    engine: &mut Engine<S>,
    tick_rate: Duration,
) -> Result<()>
where
    S: LaunchpadData + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Fetch responses and signals
        engine.drain_pending_messages();

        terminal
            .draw(|frame| render::view(frame, &engine.state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll(tick_rate)? {
            engine.process_message(message);
        }
    }

    Ok(())
}
