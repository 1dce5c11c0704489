//! Domain types for launchpad listings and wallet-scoped investor data
//!
//! All of these are owned by remote sources (indexer, contract, token
//! contracts). The client only holds read-only cached copies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::amount::{format_token_amount, parse_amount};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Build an identifier, treating blank input as absent.
            pub fn parse(value: impl Into<String>) -> Option<Self> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    None
                } else if trimmed.len() == value.len() {
                    Some(Self(value))
                } else {
                    Some(Self(trimmed.to_string()))
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// A NEAR account, e.g. `alice.near`
    AccountId
);
string_id!(
    /// Display id of a project as used in navigation paths
    ProjectId
);
string_id!(
    /// On-chain listing id of a launchpad offering
    ListingId
);

impl From<&ProjectId> for ListingId {
    /// Route ids double as listing ids for the contract views keyed by route.
    fn from(id: &ProjectId) -> Self {
        ListingId(id.0.clone())
    }
}

/// Fungible token metadata subset needed for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub symbol: String,
    pub decimals: u8,
}

/// Launchpad project metadata as served by the indexer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(alias = "id")]
    pub project_id: ProjectId,
    pub listing_id: ListingId,
    pub project_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub project_token: Option<String>,
    #[serde(default)]
    pub price_token: Option<String>,
    #[serde(default)]
    pub price_token_info: Option<TokenInfo>,
    #[serde(default)]
    pub project_token_info: Option<TokenInfo>,
    /// Price of one allocation, in price-token base units
    #[serde(default)]
    pub token_allocation_price: Option<String>,
    /// Project tokens in one allocation, in base units
    #[serde(default)]
    pub token_allocation_size: Option<String>,
    /// Project tokens offered in the sale, in base units
    #[serde(default)]
    pub total_amount_sale_project_tokens: Option<String>,
    #[serde(default)]
    pub allocations_sold: Option<String>,
    /// Unix seconds
    #[serde(default)]
    pub open_sale_1_timestamp: Option<String>,
    /// Unix seconds
    #[serde(default)]
    pub final_sale_2_timestamp: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub public: bool,
}

impl Project {
    /// Symbol of the price token, falling back to the raw contract id
    pub fn price_token_symbol(&self) -> &str {
        self.price_token_info
            .as_ref()
            .map(|info| info.symbol.as_str())
            .or(self.price_token.as_deref())
            .unwrap_or("")
    }

    pub fn price_token_decimals(&self) -> u8 {
        self.price_token_info
            .as_ref()
            .map(|info| info.decimals)
            .unwrap_or(0)
    }

    pub fn project_token_decimals(&self) -> u8 {
        self.project_token_info
            .as_ref()
            .map(|info| info.decimals)
            .unwrap_or(0)
    }
}

/// Opening and closing instants of a sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SaleWindow {
    pub opens_at: Option<DateTime<Utc>>,
    pub closes_at: Option<DateTime<Utc>>,
}

impl SaleWindow {
    /// Whether `now` falls inside the window. Unknown bounds are open-ended.
    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        let after_open = self.opens_at.map(|t| now >= t).unwrap_or(true);
        let before_close = self.closes_at.map(|t| now < t).unwrap_or(true);
        after_open && before_close
    }
}

/// Aggregate pool statistics shown on the pool details tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectStats {
    /// Formatted allocation price including symbol
    pub allocation_price: String,
    /// Formatted project tokens per allocation
    pub allocation_size: String,
    pub total_allocations: Option<u128>,
    pub allocations_sold: Option<u128>,
    /// Sold share, 0..=100
    pub sold_percent: Option<u8>,
    pub sale_window: SaleWindow,
    pub status: String,
    pub public: bool,
}

impl ProjectStats {
    pub fn from_project(project: &Project) -> Self {
        let price_decimals = project.price_token_decimals();
        let token_decimals = project.project_token_decimals();

        let allocation_price = match project.token_allocation_price.as_deref() {
            Some(raw) => {
                let amount = format_token_amount(raw, price_decimals);
                let symbol = project.price_token_symbol();
                if symbol.is_empty() {
                    amount
                } else {
                    format!("{} {}", amount, symbol)
                }
            }
            None => "-".to_string(),
        };

        let allocation_size = project
            .token_allocation_size
            .as_deref()
            .map(|raw| format_token_amount(raw, token_decimals))
            .unwrap_or_else(|| "-".to_string());

        let total_allocations = match (
            project
                .total_amount_sale_project_tokens
                .as_deref()
                .and_then(parse_amount),
            project.token_allocation_size.as_deref().and_then(parse_amount),
        ) {
            (Some(total), Some(size)) if size > 0 => Some(total / size),
            _ => None,
        };

        let allocations_sold = project.allocations_sold.as_deref().and_then(parse_amount);

        let sold_percent = match (allocations_sold, total_allocations) {
            (Some(sold), Some(total)) if total > 0 => {
                Some((sold.saturating_mul(100) / total).min(100) as u8)
            }
            _ => None,
        };

        Self {
            allocation_price,
            allocation_size,
            total_allocations,
            allocations_sold,
            sold_percent,
            sale_window: SaleWindow {
                opens_at: parse_unix_seconds(project.open_sale_1_timestamp.as_deref()),
                closes_at: parse_unix_seconds(project.final_sale_2_timestamp.as_deref()),
            },
            status: project
                .status
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
            public: project.public,
        }
    }
}

fn parse_unix_seconds(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let secs: i64 = raw?.trim().parse().ok()?;
    DateTime::from_timestamp(secs, 0)
}

/// Maximum amount an account may currently invest in a listing.
///
/// Kept as the numeric string the contract returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvestorAllowance(String);

impl InvestorAllowance {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_u128(&self) -> Option<u128> {
        parse_amount(&self.0)
    }
}

impl Default for InvestorAllowance {
    fn default() -> Self {
        Self("0".to_string())
    }
}

impl std::fmt::Display for InvestorAllowance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Allocations already committed to an account for a listing
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InvestorAllocation {
    /// Number of allocations bought
    #[serde(default = "zero")]
    pub allocation_count: String,
    /// Project tokens already withdrawn, in base units
    #[serde(default = "zero")]
    pub quantity_withdrawn: String,
}

impl InvestorAllocation {
    pub fn count(&self) -> u64 {
        self.allocation_count.trim().parse().unwrap_or(0)
    }
}

fn zero() -> String {
    "0".to_string()
}

/// A single vesting release for an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VestingEntry {
    /// Project tokens released by this entry, in base units
    pub amount: String,
    /// Unix seconds at which the entry unlocks
    #[serde(default)]
    pub unlock_timestamp: Option<i64>,
    #[serde(default)]
    pub withdrawn: bool,
}

impl VestingEntry {
    pub fn unlocks_at(&self) -> Option<DateTime<Utc>> {
        self.unlock_timestamp
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    /// Entries without a timestamp are considered unlocked.
    pub fn is_unlocked(&self, now: DateTime<Utc>) -> bool {
        self.unlocks_at().map(|t| now >= t).unwrap_or(true)
    }
}

/// Vesting schedule entries tied to a listing, computed by the contract
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VestedAllocations(pub Vec<VestingEntry>);

impl VestedAllocations {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VestingEntry> {
        self.0.iter()
    }

    /// Sum of all entry amounts; `None` if any amount is malformed
    pub fn total_amount(&self) -> Option<u128> {
        self.0
            .iter()
            .try_fold(0u128, |acc, e| Some(acc.saturating_add(parse_amount(&e.amount)?)))
    }
}

/// An account's balance of a fungible token, in base units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenBalance(String);

impl TokenBalance {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TokenBalance {
    fn default() -> Self {
        Self("0".to_string())
    }
}
