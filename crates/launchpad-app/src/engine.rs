//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the data source and
//! the event broadcaster. Both frontends drive it the same way: feed it
//! messages, then render or serialize the resulting state.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info};

use launchpad_chain::LaunchpadData;
use launchpad_core::ProjectId;

use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::page::{LoadTransition, LoadingFlags, SourceKind};
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Lightweight snapshot of page state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone)]
struct StateSnapshot {
    generation: u64,
    navigated: bool,
    loading: LoadingFlags,
    route: Option<String>,
    project_id: Option<ProjectId>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            generation: state.page.generation(),
            navigated: state.page.is_navigated(),
            loading: *state.page.loading(),
            route: state.page.route().map(str::to_string),
            project_id: state.page.project_id().cloned(),
        }
    }
}

/// Orchestration engine for the launchpad terminal.
///
/// Generic over the data source so tests and the headless runner can drive
/// it with a scripted source.
pub struct Engine<S> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, fetch tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Data source shared with every fetch task
    source: Arc<S>,

    /// Event broadcaster for external consumers.
    event_tx: broadcast::Sender<EngineEvent>,
}

impl<S> Engine<S>
where
    S: LaunchpadData + Send + Sync + 'static,
{
    /// Create a new Engine.
    ///
    /// Must be called from within a tokio runtime: it spawns the signal
    /// handler.
    pub fn new(settings: Settings, source: Arc<S>) -> Self {
        let state = AppState::with_settings(settings);

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

        signals::spawn_signal_handler(msg_tx.clone());

        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            source,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped. Use `broadcast::error::RecvError::Lagged` to detect this.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// events for the resulting page changes.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        let transitions =
            process::process_message(&mut self.state, msg, &self.msg_tx, &self.source);

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post, &transitions);
    }

    /// Show the project page for `route`
    pub fn navigate(&mut self, route: impl Into<String>) {
        self.process_message(Message::Navigate {
            route: route.into(),
        });
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Initiate shutdown. In-flight fetches are left to finish on their own;
    /// their responses are dropped with the channel.
    pub async fn shutdown(&mut self) {
        info!("Engine shutting down");
        self.emit(EngineEvent::Shutdown);
        self.msg_rx.close();
    }

    fn emit_events(
        &self,
        pre: &StateSnapshot,
        post: &StateSnapshot,
        transitions: &[LoadTransition],
    ) {
        let new_generation = post.generation != pre.generation;

        if new_generation && post.navigated {
            self.emit(EngineEvent::Navigated {
                route: post.route.clone(),
                project_id: post.project_id.clone(),
                generation: post.generation,
            });
        }

        if !new_generation {
            for source in SourceKind::ALL {
                if pre.loading.get(source) && !post.loading.get(source) {
                    self.emit(EngineEvent::SourceSettled { source });
                }
            }
        }

        if transitions.contains(&LoadTransition::Settled) {
            self.emit(EngineEvent::PageReady {
                generation: post.generation,
            });
        }
    }

    fn emit(&self, event: EngineEvent) {
        debug!("Engine event: {}", event.event_type());
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }
}
