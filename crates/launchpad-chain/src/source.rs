//! The data-source seam used by the page.
//!
//! Each method corresponds to one independent source on the project page.
//! Implementations must be callable concurrently from spawned tasks.

use std::time::Duration;

use launchpad_core::prelude::*;
use launchpad_core::{
    AccountId, InvestorAllocation, InvestorAllowance, ListingId, Project, ProjectId, TokenBalance,
    VestedAllocations,
};

use crate::contract;
use crate::graphql::GraphQlClient;
use crate::rpc::{build_http_client, NearRpcClient};

#[trait_variant::make(LaunchpadData: Send)]
pub trait LocalLaunchpadData {
    /// Investment allowance for the account on a listing
    async fn investor_allowance(
        &self,
        account_id: &AccountId,
        listing_id: &ListingId,
    ) -> Result<InvestorAllowance>;

    /// Project metadata from the indexer
    async fn project(
        &self,
        account_id: Option<&AccountId>,
        project_id: &ProjectId,
    ) -> Result<Option<Project>>;

    async fn investor_allocation(
        &self,
        account_id: &AccountId,
        listing_id: &ListingId,
    ) -> Result<Option<InvestorAllocation>>;

    async fn vested_allocations(
        &self,
        account_id: &AccountId,
        listing_id: &ListingId,
    ) -> Result<VestedAllocations>;

    /// Balance of `token` held by the account
    async fn token_balance(&self, token: &str, account_id: &AccountId) -> Result<TokenBalance>;
}

/// Endpoints and contract used by [`ChainDataSource`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    pub rpc_url: String,
    pub graphql_url: String,
    pub launchpad_contract: String,
    pub request_timeout: Duration,
}

/// Live implementation over NEAR RPC and the indexer
#[derive(Debug)]
pub struct ChainDataSource {
    rpc: NearRpcClient,
    graphql: GraphQlClient,
    launchpad_contract: String,
}

impl ChainDataSource {
    pub fn new(config: &ChainConfig) -> Result<Self> {
        let client = build_http_client(config.request_timeout)?;
        Ok(Self {
            rpc: NearRpcClient::new(client.clone(), config.rpc_url.clone()),
            graphql: GraphQlClient::new(client, config.graphql_url.clone()),
            launchpad_contract: config.launchpad_contract.clone(),
        })
    }

    /// Contract id used for launchpad views. Not validated; an empty or
    /// unknown id surfaces as a failed call.
    pub fn launchpad_contract(&self) -> &str {
        &self.launchpad_contract
    }
}

impl LaunchpadData for ChainDataSource {
    async fn investor_allowance(
        &self,
        account_id: &AccountId,
        listing_id: &ListingId,
    ) -> Result<InvestorAllowance> {
        contract::view_allowance_raw(&self.rpc, &self.launchpad_contract, account_id, listing_id)
            .await
    }

    async fn project(
        &self,
        account_id: Option<&AccountId>,
        project_id: &ProjectId,
    ) -> Result<Option<Project>> {
        self.graphql.launchpad_project(account_id, project_id).await
    }

    async fn investor_allocation(
        &self,
        account_id: &AccountId,
        listing_id: &ListingId,
    ) -> Result<Option<InvestorAllocation>> {
        contract::view_investor_allocation(
            &self.rpc,
            &self.launchpad_contract,
            account_id,
            listing_id,
        )
        .await
    }

    async fn vested_allocations(
        &self,
        account_id: &AccountId,
        listing_id: &ListingId,
    ) -> Result<VestedAllocations> {
        contract::view_vested_allocations(
            &self.rpc,
            &self.launchpad_contract,
            account_id,
            listing_id,
        )
        .await
    }

    async fn token_balance(&self, token: &str, account_id: &AccountId) -> Result<TokenBalance> {
        contract::ft_balance_of(&self.rpc, token, account_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_source_keeps_contract_verbatim() {
        let config = ChainConfig {
            rpc_url: "https://rpc.testnet.near.org".to_string(),
            graphql_url: "https://indexer.example/graphql".to_string(),
            launchpad_contract: String::new(),
            request_timeout: Duration::from_secs(10),
        };
        let source = ChainDataSource::new(&config).unwrap();
        assert_eq!(source.launchpad_contract(), "");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_recoverable_error() {
        let config = ChainConfig {
            rpc_url: "http://127.0.0.1:9/".to_string(),
            graphql_url: "http://127.0.0.1:9/".to_string(),
            launchpad_contract: "launchpad.testnet".to_string(),
            request_timeout: Duration::from_millis(500),
        };
        let source = ChainDataSource::new(&config).unwrap();
        let account = AccountId::parse("alice.testnet").unwrap();
        let listing = ListingId::parse("1").unwrap();

        let err = LaunchpadData::investor_allowance(&source, &account, &listing)
            .await
            .unwrap_err();
        assert!(err.is_recoverable());
    }
}
