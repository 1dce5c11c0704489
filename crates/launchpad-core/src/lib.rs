//! # launchpad-core - Core Domain Types
//!
//! Foundation crate for the launchpad terminal. Provides domain types, route
//! parsing, token amount formatting, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`AccountId`], [`ProjectId`], [`ListingId`] - Identifier newtypes
//! - [`Project`] - Listing metadata as served by the indexer
//! - [`ProjectStats`] - Read-only pool statistics derived from a project
//! - [`InvestorAllowance`], [`InvestorAllocation`], [`VestedAllocations`], [`TokenBalance`]
//!
//! ### Routing (`route`)
//! - [`parse_project_route()`] - Extract a project id from a navigation path
//!
//! ### Amounts (`amount`)
//! - [`format_token_amount()`] - Render base-unit integers as decimal strings
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use launchpad_core::prelude::*;
//! ```

pub mod amount;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod route;
pub mod types;

pub use amount::{format_token_amount, parse_amount};
pub use error::{Error, Result};
pub use route::{parse_project_route, project_route, PROJECTS_ROUTE};
pub use types::{
    AccountId, InvestorAllocation, InvestorAllowance, ListingId, Project, ProjectId,
    ProjectStats, SaleWindow, TokenBalance, TokenInfo, VestedAllocations, VestingEntry,
};
