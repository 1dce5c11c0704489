//! Project detail page view-state
//!
//! Owns the page's identifiers (route project id and wallet account), the
//! selected tab, the cached source values and one pending flag per source.
//! Identifier changes start a new request generation; responses tagged with
//! an older generation are discarded.

pub mod loading;
pub mod outcome;
pub mod request;
pub mod tab;

pub use loading::{LoadTransition, LoadingFlags, SourceKind};
pub use outcome::AllowanceOutcome;
pub use request::{FetchRequest, RequestTag};
pub use tab::PageTab;

use serde::Serialize;

use launchpad_core::prelude::*;
use launchpad_core::{
    parse_project_route, AccountId, InvestorAllocation, InvestorAllowance, ListingId, Project,
    ProjectId, ProjectStats, TokenBalance, VestedAllocations,
};

/// Read-only copies of the remote values shown on the page
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageData {
    pub project: Option<Project>,
    pub allowance: InvestorAllowance,
    pub allocation: Option<InvestorAllocation>,
    pub vested: VestedAllocations,
    pub price_token_balance: TokenBalance,
}

impl PageData {
    /// Clear everything but the allowance. The allowance survives a refresh
    /// of the same account and listing and is replaced only by a successful
    /// allowance response.
    fn reset_keeping_allowance(&mut self) {
        let allowance = std::mem::take(&mut self.allowance);
        *self = PageData {
            allowance,
            ..PageData::default()
        };
    }
}

/// Requests to dispatch and the aggregate loading change caused by an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEffect {
    pub requests: Vec<FetchRequest>,
    pub transition: LoadTransition,
}

impl PageEffect {
    pub fn none() -> Self {
        Self {
            requests: Vec::new(),
            transition: LoadTransition::Unchanged,
        }
    }

    fn settled(transition: LoadTransition) -> Self {
        Self {
            requests: Vec::new(),
            transition,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectPage {
    route: Option<String>,
    project_id: Option<ProjectId>,
    account_id: Option<AccountId>,
    generation: u64,
    navigated: bool,
    ready_generation: Option<u64>,
    /// Account and listing the cached allowance was resolved for
    allowance_owner: Option<(AccountId, ListingId)>,
    tab: PageTab,
    loading: LoadingFlags,
    data: PageData,
}

impl ProjectPage {
    pub fn new(account_id: Option<AccountId>) -> Self {
        Self {
            account_id,
            ..Self::default()
        }
    }

    // ─────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────

    pub fn route(&self) -> Option<&str> {
        self.route.as_deref()
    }

    pub fn project_id(&self) -> Option<&ProjectId> {
        self.project_id.as_ref()
    }

    pub fn account_id(&self) -> Option<&AccountId> {
        self.account_id.as_ref()
    }

    pub fn has_account(&self) -> bool {
        self.account_id.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_navigated(&self) -> bool {
        self.navigated
    }

    pub fn tab(&self) -> PageTab {
        self.tab
    }

    pub fn loading(&self) -> &LoadingFlags {
        &self.loading
    }

    pub fn data(&self) -> &PageData {
        &self.data
    }

    pub fn stats(&self) -> Option<ProjectStats> {
        self.data.project.as_ref().map(ProjectStats::from_project)
    }

    /// True until the page has been navigated to and every source settled
    pub fn is_loading(&self) -> bool {
        !self.navigated || self.loading.any()
    }

    pub fn current_tag(&self) -> RequestTag {
        RequestTag {
            generation: self.generation,
            account_id: self.account_id.clone(),
            project_id: self.project_id.clone(),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Navigation and identifiers
    // ─────────────────────────────────────────────────────────

    /// Show the page for `route`. A route without a project id renders an
    /// empty page without issuing any request.
    pub fn navigate(&mut self, route: &str) -> PageEffect {
        let route = route.trim();
        self.route = Some(route.to_string());
        self.project_id = parse_project_route(route);
        if self.project_id.is_none() {
            debug!("Route '{}' carries no project id, skipping all sources", route);
        }
        self.tab = PageTab::Pool;
        self.navigated = true;
        self.start_generation()
    }

    /// Leave the page. In-flight responses become stale.
    pub fn leave(&mut self) {
        self.tab = PageTab::Pool;
        self.navigated = false;
        self.generation += 1;
        self.loading = LoadingFlags::default();
    }

    /// Re-issue every source for the current identifiers
    pub fn refresh(&mut self) -> PageEffect {
        if !self.navigated {
            return PageEffect::none();
        }
        self.start_generation()
    }

    /// Apply a wallet session change
    pub fn set_account(&mut self, account_id: Option<AccountId>) -> PageEffect {
        if self.account_id == account_id {
            return PageEffect::none();
        }

        info!(
            "Wallet session changed: {}",
            account_id.as_ref().map(|a| a.as_str()).unwrap_or("<anonymous>")
        );
        self.account_id = account_id;

        if !self.has_account() && self.tab == PageTab::Investments {
            self.tab = PageTab::Pool;
        }

        if !self.navigated {
            return PageEffect::none();
        }
        self.start_generation()
    }

    // ─────────────────────────────────────────────────────────
    // Tabs
    // ─────────────────────────────────────────────────────────

    /// Select `tab` if it is enabled. Returns whether the selection changed.
    pub fn select_tab(&mut self, tab: PageTab) -> bool {
        if !tab.is_enabled(self.has_account()) {
            debug!("Ignoring selection of disabled tab {:?}", tab);
            return false;
        }
        let changed = self.tab != tab;
        self.tab = tab;
        changed
    }

    pub fn next_tab(&mut self) -> bool {
        self.select_tab(self.tab.other())
    }

    // ─────────────────────────────────────────────────────────
    // Request lifecycle
    // ─────────────────────────────────────────────────────────

    fn start_generation(&mut self) -> PageEffect {
        self.generation += 1;
        self.loading = LoadingFlags::default();
        self.data.reset_keeping_allowance();

        let owner = self.allowance_pair();
        if self.allowance_owner.is_some() && self.allowance_owner != owner {
            debug!("Allowance pair changed, dropping cached '{}'", self.data.allowance);
            self.data.allowance = InvestorAllowance::default();
            self.allowance_owner = None;
        }

        let tag = self.current_tag();
        let mut requests = Vec::new();

        if let Some(project_id) = self.project_id.clone() {
            self.loading.project = true;
            requests.push(FetchRequest::Project {
                tag: tag.clone(),
                account_id: self.account_id.clone(),
                project_id: project_id.clone(),
            });

            if let Some(account_id) = self.account_id.clone() {
                let listing_id = ListingId::from(&project_id);

                self.loading.allowance = true;
                requests.push(FetchRequest::Allowance {
                    tag: tag.clone(),
                    account_id: account_id.clone(),
                    listing_id: listing_id.clone(),
                });

                self.loading.allocation = true;
                requests.push(FetchRequest::InvestorAllocation {
                    tag: tag.clone(),
                    account_id,
                    listing_id,
                });

                // Keyed by project fields, issued once the project resolves
                self.loading.vested_allocations = true;
                self.loading.price_token_balance = true;
            }
        }

        debug!(
            "Generation {} issued {} request(s), pending: {:?}",
            self.generation,
            requests.len(),
            self.loading.pending()
        );

        let transition = if self.loading.any() {
            LoadTransition::Started
        } else {
            self.check_settled()
        };

        PageEffect {
            requests,
            transition,
        }
    }

    fn allowance_pair(&self) -> Option<(AccountId, ListingId)> {
        let account_id = self.account_id.clone()?;
        let project_id = self.project_id.as_ref()?;
        Some((account_id, ListingId::from(project_id)))
    }

    fn check_settled(&mut self) -> LoadTransition {
        if self.navigated && !self.loading.any() && self.ready_generation != Some(self.generation) {
            self.ready_generation = Some(self.generation);
            LoadTransition::Settled
        } else {
            LoadTransition::Unchanged
        }
    }

    fn accept(&self, tag: &RequestTag, kind: SourceKind) -> bool {
        if *tag != self.current_tag() || !self.loading.get(kind) {
            debug!(
                "Discarding stale {} response (generation {}, current {})",
                kind, tag.generation, self.generation
            );
            return false;
        }
        true
    }

    fn settle(&mut self, kind: SourceKind) -> LoadTransition {
        self.loading.set(kind, false);
        self.check_settled()
    }

    pub fn apply_allowance(
        &mut self,
        tag: &RequestTag,
        outcome: AllowanceOutcome,
    ) -> Option<PageEffect> {
        if !self.accept(tag, SourceKind::Allowance) {
            return None;
        }
        match &outcome {
            AllowanceOutcome::Degraded { reason } => warn!(
                "Allowance fetch failed, keeping '{}': {}",
                self.data.allowance, reason
            ),
            AllowanceOutcome::Resolved(_) => self.allowance_owner = self.allowance_pair(),
        }
        self.data.allowance = outcome.resolve(&self.data.allowance);
        Some(PageEffect::settled(self.settle(SourceKind::Allowance)))
    }

    pub fn apply_project(
        &mut self,
        tag: &RequestTag,
        result: std::result::Result<Option<Project>, String>,
    ) -> Option<PageEffect> {
        if !self.accept(tag, SourceKind::Project) {
            return None;
        }

        let mut requests = Vec::new();
        match result {
            Ok(Some(project)) => {
                match self.account_id.clone() {
                    Some(account_id) => {
                        requests.push(FetchRequest::VestedAllocations {
                            tag: tag.clone(),
                            account_id: account_id.clone(),
                            listing_id: project.listing_id.clone(),
                        });
                        match project.price_token.as_deref().map(str::trim) {
                            Some(token) if !token.is_empty() => {
                                requests.push(FetchRequest::PriceTokenBalance {
                                    tag: tag.clone(),
                                    token: token.to_string(),
                                    account_id,
                                });
                            }
                            _ => {
                                debug!("Project has no price token, skipping balance");
                                self.loading.price_token_balance = false;
                            }
                        }
                    }
                    None => {
                        self.loading.vested_allocations = false;
                        self.loading.price_token_balance = false;
                    }
                }
                self.data.project = Some(project);
            }
            Ok(None) => {
                debug!("No project for {:?}", tag.project_id);
                self.data.project = None;
                self.loading.vested_allocations = false;
                self.loading.price_token_balance = false;
            }
            Err(e) => {
                warn!("Project query failed: {}", e);
                self.data.project = None;
                self.loading.vested_allocations = false;
                self.loading.price_token_balance = false;
            }
        }

        let transition = self.settle(SourceKind::Project);
        Some(PageEffect {
            requests,
            transition,
        })
    }

    pub fn apply_allocation(
        &mut self,
        tag: &RequestTag,
        result: std::result::Result<Option<InvestorAllocation>, String>,
    ) -> Option<PageEffect> {
        if !self.accept(tag, SourceKind::Allocation) {
            return None;
        }
        self.data.allocation = result.unwrap_or_else(|e| {
            warn!("Investor allocation fetch failed: {}", e);
            None
        });
        Some(PageEffect::settled(self.settle(SourceKind::Allocation)))
    }

    pub fn apply_vested(
        &mut self,
        tag: &RequestTag,
        result: std::result::Result<VestedAllocations, String>,
    ) -> Option<PageEffect> {
        if !self.accept(tag, SourceKind::VestedAllocations) {
            return None;
        }
        self.data.vested = result.unwrap_or_else(|e| {
            warn!("Vested allocations fetch failed: {}", e);
            VestedAllocations::default()
        });
        Some(PageEffect::settled(
            self.settle(SourceKind::VestedAllocations),
        ))
    }

    pub fn apply_balance(
        &mut self,
        tag: &RequestTag,
        result: std::result::Result<TokenBalance, String>,
    ) -> Option<PageEffect> {
        if !self.accept(tag, SourceKind::PriceTokenBalance) {
            return None;
        }
        self.data.price_token_balance = result.unwrap_or_else(|e| {
            warn!("Price token balance fetch failed: {}", e);
            TokenBalance::default()
        });
        Some(PageEffect::settled(
            self.settle(SourceKind::PriceTokenBalance),
        ))
    }
}
