//! Tagged fetch requests
//!
//! Every request carries the identifiers it was issued for. A response is
//! applied only while its tag still equals the page's current tag.

use launchpad_core::{AccountId, ListingId, ProjectId};

use super::loading::SourceKind;

/// Originating identifiers of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTag {
    /// Bumped on every identifier change or refresh
    pub generation: u64,
    pub account_id: Option<AccountId>,
    pub project_id: Option<ProjectId>,
}

/// A single source fetch for the action dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Allowance {
        tag: RequestTag,
        account_id: AccountId,
        listing_id: ListingId,
    },
    Project {
        tag: RequestTag,
        account_id: Option<AccountId>,
        project_id: ProjectId,
    },
    InvestorAllocation {
        tag: RequestTag,
        account_id: AccountId,
        listing_id: ListingId,
    },
    VestedAllocations {
        tag: RequestTag,
        account_id: AccountId,
        listing_id: ListingId,
    },
    PriceTokenBalance {
        tag: RequestTag,
        token: String,
        account_id: AccountId,
    },
}

impl FetchRequest {
    pub fn source(&self) -> SourceKind {
        match self {
            FetchRequest::Allowance { .. } => SourceKind::Allowance,
            FetchRequest::Project { .. } => SourceKind::Project,
            FetchRequest::InvestorAllocation { .. } => SourceKind::Allocation,
            FetchRequest::VestedAllocations { .. } => SourceKind::VestedAllocations,
            FetchRequest::PriceTokenBalance { .. } => SourceKind::PriceTokenBalance,
        }
    }

    pub fn tag(&self) -> &RequestTag {
        match self {
            FetchRequest::Allowance { tag, .. }
            | FetchRequest::Project { tag, .. }
            | FetchRequest::InvestorAllocation { tag, .. }
            | FetchRequest::VestedAllocations { tag, .. }
            | FetchRequest::PriceTokenBalance { tag, .. } => tag,
        }
    }
}
