//! Headless mode runner - event loop without the TUI
//!
//! Loads the page for one route, reports its progress as NDJSON and exits
//! once every source has settled.

use std::io::Write;
use std::sync::Arc;

use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::broadcast::Receiver;

use launchpad_app::config::Settings;
use launchpad_app::{Engine, EngineEvent};
use launchpad_chain::{ChainDataSource, LaunchpadData};
use launchpad_core::prelude::*;

use super::{HeadlessEvent, PageSnapshot};

/// Run in headless mode against the live chain, writing events to stdout
pub async fn run_headless(route: &str, settings: Settings) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Launchpad terminal starting in HEADLESS mode");
    info!("Route: {}", route);
    info!("═══════════════════════════════════════════════════════");

    let source = match ChainDataSource::new(&settings.chain_config()) {
        Ok(source) => source,
        Err(e) => {
            HeadlessEvent::error(e.to_string(), true).emit();
            return Err(e);
        }
    };

    let engine = Engine::new(settings, Arc::new(source));
    let mut stdout = std::io::stdout();
    let snapshot = run_headless_with_engine(engine, route, &mut stdout).await?;

    if snapshot.is_none() {
        info!("Quit before the page was ready");
    }
    info!("Launchpad terminal headless mode exiting");
    Ok(())
}

/// Drive `engine` to a ready page for `route`, writing events to `out`.
///
/// Returns the ready page, or `None` if the engine quit first.
pub async fn run_headless_with_engine<S, W>(
    mut engine: Engine<S>,
    route: &str,
    out: &mut W,
) -> Result<Option<PageSnapshot>>
where
    S: LaunchpadData + Send + Sync + 'static,
    W: Write,
{
    let mut events = engine.subscribe();
    engine.navigate(route);

    let result = headless_event_loop(&mut engine, &mut events, out).await;

    engine.shutdown().await;
    result
}

async fn headless_event_loop<S, W>(
    engine: &mut Engine<S>,
    events: &mut Receiver<EngineEvent>,
    out: &mut W,
) -> Result<Option<PageSnapshot>>
where
    S: LaunchpadData + Send + Sync + 'static,
    W: Write,
{
    loop {
        if let Some(snapshot) = flush_events(engine, events, out)? {
            return Ok(Some(snapshot));
        }

        if engine.should_quit() {
            info!("Quit requested");
            return Ok(None);
        }

        match engine.msg_rx.recv().await {
            Some(msg) => engine.process_message(msg),
            None => {
                info!("Message channel closed");
                return Ok(None);
            }
        }
    }
}

/// Write every queued engine event. Returns the snapshot once the page is ready.
fn flush_events<S, W: Write>(
    engine: &Engine<S>,
    events: &mut Receiver<EngineEvent>,
    out: &mut W,
) -> Result<Option<PageSnapshot>> {
    loop {
        match events.try_recv() {
            Ok(event) => {
                let Some(headless) = HeadlessEvent::from_engine_event(&event, &engine.state)
                else {
                    continue;
                };
                write_event(out, &headless)?;

                if let HeadlessEvent::PageReady { page, .. } = headless {
                    return Ok(Some(*page));
                }
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return Ok(None),
            Err(TryRecvError::Lagged(skipped)) => {
                warn!("Headless output lagged, {} events dropped", skipped);
                write_event(
                    out,
                    &HeadlessEvent::error(format!("{} events dropped", skipped), false),
                )?;
            }
        }
    }
}

fn write_event<W: Write>(out: &mut W, event: &HeadlessEvent) -> Result<()> {
    event
        .write_to(out)
        .map_err(|e| Error::terminal(format!("Failed to write headless event: {}", e)))
}
