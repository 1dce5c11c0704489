//! # launchpad-chain - Contract Views and Indexer Queries
//!
//! Read-only access to the external sources behind the project page: NEAR
//! JSON-RPC view calls on the launchpad and token contracts, and the indexer's
//! GraphQL endpoint for project metadata.
//!
//! Depends on [`launchpad_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Data Source
//! - [`LaunchpadData`] - Async seam with one method per page source
//! - [`ChainDataSource`] - Live implementation over RPC + GraphQL
//! - [`ChainConfig`] - Endpoints, contract id and request timeout
//!
//! ### Transport
//! - [`NearRpcClient`] - `call_function` view calls
//! - [`GraphQlClient`] - `LaunchPadProject` query
//!
//! ### Testing
//! - `test_utils::FakeDataSource` (feature `test-helpers`)

pub mod contract;
pub mod graphql;
pub mod rpc;
pub mod source;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use graphql::GraphQlClient;
pub use rpc::NearRpcClient;
pub use source::{ChainConfig, ChainDataSource, LaunchpadData, LocalLaunchpadData};
