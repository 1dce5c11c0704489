//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner serializes them as NDJSON.

use launchpad_core::ProjectId;

use crate::page::SourceKind;

/// Page lifecycle events observed by comparing state before and after a
/// message was processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// A new request generation started for the page
    Navigated {
        route: Option<String>,
        project_id: Option<ProjectId>,
        generation: u64,
    },

    /// A source finished (successfully or not) for the current generation
    SourceSettled { source: SourceKind },

    /// Every source of the generation has settled
    PageReady { generation: u64 },

    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Returns a short string label for this event type (for logging/debugging).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Navigated { .. } => "navigated",
            Self::SourceSettled { .. } => "source_settled",
            Self::PageReady { .. } => "page_ready",
            Self::Shutdown => "shutdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_labels() {
        assert_eq!(
            EngineEvent::Navigated {
                route: None,
                project_id: None,
                generation: 1
            }
            .event_type(),
            "navigated"
        );
        assert_eq!(
            EngineEvent::SourceSettled {
                source: SourceKind::Allowance
            }
            .event_type(),
            "source_settled"
        );
        assert_eq!(
            EngineEvent::PageReady { generation: 2 }.event_type(),
            "page_ready"
        );
        assert_eq!(EngineEvent::Shutdown.event_type(), "shutdown");
    }

    #[test]
    fn test_events_are_cloneable() {
        let event = EngineEvent::PageReady { generation: 3 };
        assert_eq!(event.clone(), event);
    }
}
