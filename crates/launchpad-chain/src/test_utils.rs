//! Test utilities for chain data
//!
//! Provides builder functions for domain values and a scripted
//! [`FakeDataSource`] implementing [`LaunchpadData`].

use std::sync::Mutex;
use std::time::Duration;

use launchpad_core::prelude::*;
use launchpad_core::{
    AccountId, InvestorAllocation, InvestorAllowance, ListingId, Project, ProjectId, TokenBalance,
    TokenInfo, VestedAllocations, VestingEntry,
};

use crate::source::LaunchpadData;

/// Creates a test project.
///
/// # Arguments
/// * `id` - Project id as used in routes
/// * `listing` - On-chain listing id
/// * `price_token` - Price token contract, if the project has one
pub fn test_project(id: &str, listing: &str, price_token: Option<&str>) -> Project {
    Project {
        project_id: ProjectId::parse(id).unwrap_or_else(|| panic!("empty project id")),
        listing_id: ListingId::parse(listing).unwrap_or_else(|| panic!("empty listing id")),
        project_name: format!("Project {}", id),
        description: "A test listing".to_string(),
        image: None,
        project_token: Some(format!("{}.token.near", id)),
        price_token: price_token.map(str::to_string),
        price_token_info: price_token.map(|_| TokenInfo {
            symbol: "USDT".to_string(),
            decimals: 6,
        }),
        project_token_info: Some(TokenInfo {
            symbol: "TKN".to_string(),
            decimals: 18,
        }),
        token_allocation_price: Some("250000000".to_string()),
        token_allocation_size: Some("1000000000000000000000".to_string()),
        total_amount_sale_project_tokens: Some("100000000000000000000000".to_string()),
        allocations_sold: Some("25".to_string()),
        open_sale_1_timestamp: Some("1700000000".to_string()),
        final_sale_2_timestamp: Some("1700086400".to_string()),
        status: Some("sale".to_string()),
        public: true,
    }
}

/// Creates a test allocation with the given count.
pub fn test_allocation(count: u64) -> InvestorAllocation {
    InvestorAllocation {
        allocation_count: count.to_string(),
        quantity_withdrawn: "0".to_string(),
    }
}

/// Creates vesting entries with the given amounts, unlocking one day apart.
pub fn test_vesting(amounts: &[&str]) -> VestedAllocations {
    VestedAllocations(
        amounts
            .iter()
            .enumerate()
            .map(|(i, amount)| VestingEntry {
                amount: amount.to_string(),
                unlock_timestamp: Some(1_700_000_000 + i as i64 * 86_400),
                withdrawn: false,
            })
            .collect(),
    )
}

/// A call observed by [`FakeDataSource`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeCall {
    Allowance {
        account_id: AccountId,
        listing_id: ListingId,
    },
    Project {
        account_id: Option<AccountId>,
        project_id: ProjectId,
    },
    Allocation {
        account_id: AccountId,
        listing_id: ListingId,
    },
    Vested {
        account_id: AccountId,
        listing_id: ListingId,
    },
    Balance {
        token: String,
        account_id: AccountId,
    },
}

#[derive(Debug, Clone)]
struct Scripted<T> {
    response: std::result::Result<T, String>,
    delay: Duration,
}

impl<T: Clone> Scripted<T> {
    fn ok(value: T) -> Self {
        Self {
            response: Ok(value),
            delay: Duration::ZERO,
        }
    }

    async fn play(&self, method: &str) -> Result<T> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.response
            .clone()
            .map_err(|message| Error::contract_view(method, message))
    }
}

/// Scripted [`LaunchpadData`] that records every call.
///
/// Defaults: allowance `"0"`, no project, no allocation, empty vesting,
/// zero balance. All responses are immediate unless a delay is set.
#[derive(Debug)]
pub struct FakeDataSource {
    allowance: Scripted<InvestorAllowance>,
    project: Scripted<Option<Project>>,
    allocation: Scripted<Option<InvestorAllocation>>,
    vested: Scripted<VestedAllocations>,
    balance: Scripted<TokenBalance>,
    calls: Mutex<Vec<FakeCall>>,
}

impl Default for FakeDataSource {
    fn default() -> Self {
        Self {
            allowance: Scripted::ok(InvestorAllowance::default()),
            project: Scripted::ok(None),
            allocation: Scripted::ok(None),
            vested: Scripted::ok(VestedAllocations::default()),
            balance: Scripted::ok(TokenBalance::default()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allowance(mut self, value: &str) -> Self {
        self.allowance.response = Ok(InvestorAllowance::new(value));
        self
    }

    pub fn with_allowance_error(mut self, message: &str) -> Self {
        self.allowance.response = Err(message.to_string());
        self
    }

    pub fn with_allowance_delay(mut self, delay: Duration) -> Self {
        self.allowance.delay = delay;
        self
    }

    pub fn with_project(mut self, project: Project) -> Self {
        self.project.response = Ok(Some(project));
        self
    }

    pub fn with_project_error(mut self, message: &str) -> Self {
        self.project.response = Err(message.to_string());
        self
    }

    pub fn with_project_delay(mut self, delay: Duration) -> Self {
        self.project.delay = delay;
        self
    }

    pub fn with_allocation(mut self, allocation: InvestorAllocation) -> Self {
        self.allocation.response = Ok(Some(allocation));
        self
    }

    pub fn with_vested(mut self, vested: VestedAllocations) -> Self {
        self.vested.response = Ok(vested);
        self
    }

    pub fn with_balance(mut self, value: &str) -> Self {
        self.balance.response = Ok(TokenBalance::new(value));
        self
    }

    pub fn with_balance_error(mut self, message: &str) -> Self {
        self.balance.response = Err(message.to_string());
        self
    }

    /// Every call received so far, in arrival order
    pub fn calls(&self) -> Vec<FakeCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn record(&self, call: FakeCall) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
    }
}

impl LaunchpadData for FakeDataSource {
    async fn investor_allowance(
        &self,
        account_id: &AccountId,
        listing_id: &ListingId,
    ) -> Result<InvestorAllowance> {
        self.record(FakeCall::Allowance {
            account_id: account_id.clone(),
            listing_id: listing_id.clone(),
        });
        self.allowance.play("view_allowance_raw").await
    }

    async fn project(
        &self,
        account_id: Option<&AccountId>,
        project_id: &ProjectId,
    ) -> Result<Option<Project>> {
        self.record(FakeCall::Project {
            account_id: account_id.cloned(),
            project_id: project_id.clone(),
        });
        self.project.play("launchpad_project").await
    }

    async fn investor_allocation(
        &self,
        account_id: &AccountId,
        listing_id: &ListingId,
    ) -> Result<Option<InvestorAllocation>> {
        self.record(FakeCall::Allocation {
            account_id: account_id.clone(),
            listing_id: listing_id.clone(),
        });
        self.allocation.play("view_investor_allocation").await
    }

    async fn vested_allocations(
        &self,
        account_id: &AccountId,
        listing_id: &ListingId,
    ) -> Result<VestedAllocations> {
        self.record(FakeCall::Vested {
            account_id: account_id.clone(),
            listing_id: listing_id.clone(),
        });
        self.vested.play("view_vested_allocations").await
    }

    async fn token_balance(&self, token: &str, account_id: &AccountId) -> Result<TokenBalance> {
        self.record(FakeCall::Balance {
            token: token.to_string(),
            account_id: account_id.clone(),
        });
        self.balance.play("ft_balance_of").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_builder() {
        let project = test_project("p1", "7", Some("usdt.near"));
        assert_eq!(project.project_id.as_str(), "p1");
        assert_eq!(project.listing_id.as_str(), "7");
        assert_eq!(project.price_token_symbol(), "USDT");

        let bare = test_project("p2", "2", None);
        assert!(bare.price_token.is_none());
    }

    #[test]
    fn test_vesting_builder() {
        let vested = test_vesting(&["10", "20"]);
        assert_eq!(vested.len(), 2);
        assert_eq!(vested.total_amount(), Some(30));
    }

    #[tokio::test]
    async fn test_fake_records_calls_and_scripts_results() {
        let fake = FakeDataSource::new()
            .with_allowance("500")
            .with_balance_error("token paused");
        let alice = AccountId::parse("alice.near").unwrap();
        let listing = ListingId::parse("7").unwrap();

        let allowance = fake.investor_allowance(&alice, &listing).await.unwrap();
        assert_eq!(allowance.as_str(), "500");

        let err = fake.token_balance("usdt.near", &alice).await.unwrap_err();
        assert!(err.to_string().contains("token paused"));

        assert_eq!(
            fake.calls(),
            vec![
                FakeCall::Allowance {
                    account_id: alice.clone(),
                    listing_id: listing,
                },
                FakeCall::Balance {
                    token: "usdt.near".to_string(),
                    account_id: alice,
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_fake_defaults() {
        let fake = FakeDataSource::new();
        let project_id = ProjectId::parse("p1").unwrap();
        assert_eq!(fake.project(None, &project_id).await.unwrap(), None);
    }
}
