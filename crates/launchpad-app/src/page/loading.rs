//! Loading flags for the five page sources

use serde::Serialize;

/// One independent asynchronous source feeding the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Allowance,
    Allocation,
    Project,
    PriceTokenBalance,
    VestedAllocations,
}

impl SourceKind {
    pub const ALL: [SourceKind; 5] = [
        SourceKind::Allowance,
        SourceKind::Allocation,
        SourceKind::Project,
        SourceKind::PriceTokenBalance,
        SourceKind::VestedAllocations,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SourceKind::Allowance => "allowance",
            SourceKind::Allocation => "allocation",
            SourceKind::Project => "project",
            SourceKind::PriceTokenBalance => "price_token_balance",
            SourceKind::VestedAllocations => "vested_allocations",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Pending flag per source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingFlags {
    pub allowance: bool,
    pub allocation: bool,
    pub project: bool,
    pub price_token_balance: bool,
    pub vested_allocations: bool,
}

impl LoadingFlags {
    pub fn get(&self, kind: SourceKind) -> bool {
        match kind {
            SourceKind::Allowance => self.allowance,
            SourceKind::Allocation => self.allocation,
            SourceKind::Project => self.project,
            SourceKind::PriceTokenBalance => self.price_token_balance,
            SourceKind::VestedAllocations => self.vested_allocations,
        }
    }

    pub fn set(&mut self, kind: SourceKind, pending: bool) {
        let slot = match kind {
            SourceKind::Allowance => &mut self.allowance,
            SourceKind::Allocation => &mut self.allocation,
            SourceKind::Project => &mut self.project,
            SourceKind::PriceTokenBalance => &mut self.price_token_balance,
            SourceKind::VestedAllocations => &mut self.vested_allocations,
        };
        *slot = pending;
    }

    /// True while at least one source is pending
    pub fn any(&self) -> bool {
        SourceKind::ALL.iter().any(|k| self.get(*k))
    }

    pub fn pending(&self) -> Vec<SourceKind> {
        SourceKind::ALL
            .iter()
            .copied()
            .filter(|k| self.get(*k))
            .collect()
    }
}

/// Change in the aggregate loading state caused by one page update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadTransition {
    /// Aggregate state did not flip
    #[default]
    Unchanged,
    /// A new generation began with at least one source pending
    Started,
    /// The last pending source of the current generation settled
    Settled,
}
