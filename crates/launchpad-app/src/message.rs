//! Message types for the application (TEA pattern)

use launchpad_core::{AccountId, InvestorAllocation, Project, TokenBalance, VestedAllocations};

use crate::dialog::CloseGesture;
use crate::input_key::InputKey;
use crate::page::{AllowanceOutcome, PageTab, RequestTag};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    /// Terminal was resized
    Resize { width: u16, height: u16 },

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Show the project page for a navigation path
    Navigate { route: String },

    /// Back button: leave the page for the projects overview
    NavigateBack,

    /// Re-issue every source for the current identifiers
    Refresh,

    /// The wallet session changed (connect, disconnect or switch)
    WalletChanged { account_id: Option<AccountId> },

    // ─────────────────────────────────────────────────────────
    // Tabs
    // ─────────────────────────────────────────────────────────
    SelectTab(PageTab),

    /// Switch to the other tab if it is enabled
    NextTab,

    // ─────────────────────────────────────────────────────────
    // Dialog
    // ─────────────────────────────────────────────────────────
    OpenProjectDialog,
    OpenTutorialDialog,
    CloseDialog(CloseGesture),
    TutorialStep { forward: bool },
    /// Finish the walkthrough from its last step
    FinishTutorial,

    // ─────────────────────────────────────────────────────────
    // Source responses
    // ─────────────────────────────────────────────────────────
    AllowanceFetched {
        tag: RequestTag,
        outcome: AllowanceOutcome,
    },
    ProjectFetched {
        tag: RequestTag,
        result: Result<Option<Project>, String>,
    },
    AllocationFetched {
        tag: RequestTag,
        result: Result<Option<InvestorAllocation>, String>,
    },
    VestedAllocationsFetched {
        tag: RequestTag,
        result: Result<VestedAllocations, String>,
    },
    PriceTokenBalanceFetched {
        tag: RequestTag,
        result: Result<TokenBalance, String>,
    },
}
