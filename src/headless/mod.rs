//! Headless mode - JSON event output instead of the TUI
//!
//! Events are written as NDJSON, one object per line, each with an `event`
//! field naming its type:
//!
//! ```json
//! {"event":"navigated","route":"/projects/p1","project_id":"p1","generation":1,"timestamp":1704700001000}
//! {"event":"source_settled","source":"project","timestamp":1704700001200}
//! {"event":"page_ready","generation":1,"page":{...},"timestamp":1704700001500}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use serde::Serialize;
use tracing::error;

use launchpad_app::state::AppState;
use launchpad_app::EngineEvent;
use launchpad_core::{InvestorAllocation, Project, ProjectStats, VestedAllocations};

/// Everything the page shows once it is ready
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSnapshot {
    pub route: Option<String>,
    pub project_id: Option<String>,
    pub account_id: Option<String>,
    pub tab: String,
    pub project: Option<Project>,
    pub stats: Option<ProjectStats>,
    pub allowance: String,
    pub allocation: Option<InvestorAllocation>,
    pub vested_allocations: VestedAllocations,
    pub price_token_balance: String,
}

impl PageSnapshot {
    pub fn capture(state: &AppState) -> Self {
        let page = &state.page;
        let data = page.data();
        Self {
            route: page.route().map(str::to_string),
            project_id: page.project_id().map(|id| id.to_string()),
            account_id: page.account_id().map(|id| id.to_string()),
            tab: page.tab().label().to_string(),
            project: data.project.clone(),
            stats: page.stats(),
            allowance: data.allowance.to_string(),
            allocation: data.allocation.clone(),
            vested_allocations: data.vested.clone(),
            price_token_balance: data.price_token_balance.as_str().to_string(),
        }
    }
}

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A new page generation started
    Navigated {
        route: Option<String>,
        project_id: Option<String>,
        generation: u64,
        timestamp: i64,
    },

    /// One source finished loading
    SourceSettled { source: String, timestamp: i64 },

    /// Every source settled
    PageReady {
        generation: u64,
        page: Box<PageSnapshot>,
        timestamp: i64,
    },

    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Map an engine event, reading page data from `state`
    pub fn from_engine_event(event: &EngineEvent, state: &AppState) -> Option<Self> {
        match event {
            EngineEvent::Navigated {
                route,
                project_id,
                generation,
            } => Some(Self::Navigated {
                route: route.clone(),
                project_id: project_id.as_ref().map(|id| id.to_string()),
                generation: *generation,
                timestamp: Self::now(),
            }),
            EngineEvent::SourceSettled { source } => Some(Self::SourceSettled {
                source: source.name().to_string(),
                timestamp: Self::now(),
            }),
            EngineEvent::PageReady { generation } => Some(Self::PageReady {
                generation: *generation,
                page: Box::new(PageSnapshot::capture(state)),
                timestamp: Self::now(),
            }),
            EngineEvent::Shutdown => None,
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Write this event to `out` as one JSON line
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = serde_json::to_string(self).map_err(io::Error::other)?;
        writeln!(out, "{}", json)?;
        out.flush()
    }

    /// Emit this event to stdout
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }
}
