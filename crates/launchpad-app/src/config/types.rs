//! Configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};

use launchpad_chain::ChainConfig;
use launchpad_core::AccountId;

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub network: NetworkSettings,

    #[serde(default)]
    pub wallet: WalletSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// Transport configuration for the live data source
    pub fn chain_config(&self) -> ChainConfig {
        ChainConfig {
            rpc_url: self.network.rpc_url.clone(),
            graphql_url: self.network.graphql_url.clone(),
            launchpad_contract: self.network.launchpad_contract.clone(),
            request_timeout: Duration::from_millis(self.network.request_timeout_ms),
        }
    }

    /// The connected wallet account, if any
    pub fn account(&self) -> Option<AccountId> {
        self.wallet
            .account_id
            .as_deref()
            .and_then(|a| AccountId::parse(a))
    }
}

/// Network endpoints and contract addresses
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NetworkSettings {
    /// NEAR JSON-RPC endpoint
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// Indexer GraphQL endpoint
    #[serde(default = "default_graphql_url")]
    pub graphql_url: String,

    /// Launchpad contract account. Overridden by `LPAD_LAUNCHPAD_CONTRACT`.
    #[serde(default)]
    pub launchpad_contract: String,

    /// Per-request timeout for RPC and indexer calls
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            graphql_url: default_graphql_url(),
            launchpad_contract: String::new(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

pub(crate) fn default_rpc_url() -> String {
    "https://rpc.mainnet.near.org".to_string()
}

pub(crate) fn default_graphql_url() -> String {
    "http://localhost:4000/graphql".to_string()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

/// Wallet session, injected read-only into the page
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct WalletSettings {
    /// Connected account; absent means an anonymous session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

/// Icon rendering mode
///
/// Controls whether the TUI uses Nerd Font glyphs (requires a patched font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs, requires a Nerd Font installed in the terminal
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Terminals narrower than this many columns use the single-column
    /// dialog layout
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: u16,

    /// From this many columns the page lays out in two columns
    #[serde(default = "default_wide_breakpoint")]
    pub wide_breakpoint: u16,

    /// Event poll interval; also drives the spinner
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            mobile_breakpoint: default_mobile_breakpoint(),
            wide_breakpoint: default_wide_breakpoint(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_mobile_breakpoint() -> u16 {
    81
}

fn default_wide_breakpoint() -> u16 {
    120
}

fn default_tick_rate_ms() -> u64 {
    50
}
