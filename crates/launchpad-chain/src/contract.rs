//! Typed view calls on the launchpad contract and NEP-141 token contracts

use serde_json::{json, Value};

use launchpad_core::prelude::*;
use launchpad_core::{
    AccountId, InvestorAllocation, InvestorAllowance, ListingId, TokenBalance, VestedAllocations,
};

use crate::rpc::NearRpcClient;

pub const VIEW_ALLOWANCE_RAW: &str = "view_allowance_raw";
pub const VIEW_INVESTOR_ALLOCATION: &str = "view_investor_allocation";
pub const VIEW_VESTED_ALLOCATIONS: &str = "view_vested_allocations";
pub const FT_BALANCE_OF: &str = "ft_balance_of";

fn investor_args(account_id: &AccountId, listing_id: &ListingId) -> Value {
    json!({
        "account_id": account_id.as_str(),
        "listing_id": listing_id.as_str(),
    })
}

/// Contracts serialize `U128` as a string, but tolerate plain numbers.
fn numeric_string(method: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) if launchpad_core::parse_amount(&s).is_some() => Ok(s.trim().to_string()),
        Value::Number(n) if n.is_u64() => Ok(n.to_string()),
        Value::Null => Ok("0".to_string()),
        other => Err(Error::contract_view(
            method,
            format!("expected a numeric string, got {}", other),
        )),
    }
}

/// How much `account_id` may currently invest in `listing_id`.
pub async fn view_allowance_raw(
    rpc: &NearRpcClient,
    contract: &str,
    account_id: &AccountId,
    listing_id: &ListingId,
) -> Result<InvestorAllowance> {
    let value: Value = rpc
        .view(contract, VIEW_ALLOWANCE_RAW, investor_args(account_id, listing_id))
        .await?;
    numeric_string(VIEW_ALLOWANCE_RAW, value).map(InvestorAllowance::new)
}

/// Allocations the account already holds; `None` if it never invested.
pub async fn view_investor_allocation(
    rpc: &NearRpcClient,
    contract: &str,
    account_id: &AccountId,
    listing_id: &ListingId,
) -> Result<Option<InvestorAllocation>> {
    rpc.view(
        contract,
        VIEW_INVESTOR_ALLOCATION,
        investor_args(account_id, listing_id),
    )
    .await
}

pub async fn view_vested_allocations(
    rpc: &NearRpcClient,
    contract: &str,
    account_id: &AccountId,
    listing_id: &ListingId,
) -> Result<VestedAllocations> {
    let vested: Option<VestedAllocations> = rpc
        .view(
            contract,
            VIEW_VESTED_ALLOCATIONS,
            investor_args(account_id, listing_id),
        )
        .await?;
    Ok(vested.unwrap_or_default())
}

/// NEP-141 balance of `account_id` on `token_contract`.
pub async fn ft_balance_of(
    rpc: &NearRpcClient,
    token_contract: &str,
    account_id: &AccountId,
) -> Result<TokenBalance> {
    let value: Value = rpc
        .view(
            token_contract,
            FT_BALANCE_OF,
            json!({ "account_id": account_id.as_str() }),
        )
        .await?;
    numeric_string(FT_BALANCE_OF, value).map(TokenBalance::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_investor_args() {
        let account = AccountId::parse("alice.near").unwrap();
        let listing = ListingId::parse("7").unwrap();
        assert_eq!(
            investor_args(&account, &listing),
            json!({ "account_id": "alice.near", "listing_id": "7" })
        );
    }

    #[test]
    fn test_numeric_string_accepts_string_and_number() {
        assert_eq!(numeric_string("m", json!("500")).unwrap(), "500");
        assert_eq!(numeric_string("m", json!(42)).unwrap(), "42");
        assert_eq!(numeric_string("m", Value::Null).unwrap(), "0");
    }

    #[test]
    fn test_numeric_string_rejects_garbage() {
        let err = numeric_string(VIEW_ALLOWANCE_RAW, json!("abc")).unwrap_err();
        assert!(matches!(err, Error::ContractView { .. }));
        assert!(numeric_string("m", json!(-3)).is_err());
        assert!(numeric_string("m", json!({ "amount": "1" })).is_err());
    }
}
