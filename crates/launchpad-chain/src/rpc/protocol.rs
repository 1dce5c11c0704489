//! JSON-RPC 2.0 types for NEAR `query` view calls.
//!
//! Only the `call_function` request type is modelled. Arguments travel as
//! base64-encoded JSON and the contract's return value comes back as a byte
//! array holding UTF-8 JSON.
//!
//! Protocol reference: <https://docs.near.org/api/rpc/contracts#call-a-contract-function>

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use launchpad_core::prelude::*;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Serialize)]
pub struct RpcRequest {
    /// Always `"2.0"`.
    pub jsonrpc: &'static str,
    pub id: String,
    /// Always `"query"` for view calls.
    pub method: &'static str,
    pub params: CallFunctionParams,
}

/// Parameters of a `call_function` query.
#[derive(Debug, Serialize)]
pub struct CallFunctionParams {
    pub request_type: &'static str,
    pub finality: &'static str,
    /// Contract account the view is executed on.
    pub account_id: String,
    pub method_name: String,
    pub args_base64: String,
}

impl RpcRequest {
    /// Build a view call against the latest final block.
    pub fn call_function(id: String, contract: &str, method: &str, args: &Value) -> Result<Self> {
        Ok(Self {
            jsonrpc: "2.0",
            id,
            method: "query",
            params: CallFunctionParams {
                request_type: "call_function",
                finality: "final",
                account_id: contract.to_string(),
                method_name: method.to_string(),
                args_base64: encode_args(args)?,
            },
        })
    }
}

/// Serialize view arguments to base64 JSON.
pub fn encode_args(args: &Value) -> Result<String> {
    let bytes = serde_json::to_vec(args)?;
    Ok(STANDARD.encode(bytes))
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// JSON-RPC 2.0 response envelope.
#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    pub id: Option<Value>,
    pub result: Option<Value>,
    pub error: Option<RpcError>,
}

/// JSON-RPC error object. NEAR adds `name` and `cause` next to the
/// standard fields.
#[derive(Debug, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cause: Option<Value>,
}

impl RpcError {
    /// Most specific human-readable description available.
    pub fn describe(&self) -> String {
        let cause = self
            .cause
            .as_ref()
            .and_then(|c| c.get("name"))
            .and_then(|n| n.as_str());

        match (self.name.as_deref(), cause) {
            (Some(name), Some(cause)) => format!("{} ({}: {})", self.message, name, cause),
            (Some(name), None) => format!("{} ({})", self.message, name),
            _ => match self.data.as_ref().and_then(|d| d.as_str()) {
                Some(data) => format!("{}: {}", self.message, data),
                None => self.message.clone(),
            },
        }
    }
}

impl RpcResponse {
    /// Unwrap the `result` payload, mapping JSON-RPC errors to [`Error::Rpc`].
    pub fn into_result(self) -> Result<Value> {
        if let Some(error) = self.error {
            return Err(Error::rpc(format!("[{}] {}", error.code, error.describe())));
        }
        self.result
            .ok_or_else(|| Error::rpc("response carried neither result nor error"))
    }
}

/// The `result` object of a successful `call_function` query.
///
/// A contract panic is reported here as `error` rather than as a JSON-RPC
/// error.
#[derive(Debug, Deserialize)]
pub struct CallFunctionResult {
    #[serde(default)]
    pub result: Option<Vec<u8>>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub logs: Vec<String>,
    #[serde(default)]
    pub block_height: Option<u64>,
}

impl CallFunctionResult {
    /// Decode the contract return bytes as JSON.
    pub fn decode<T: DeserializeOwned>(self, method: &str) -> Result<T> {
        if let Some(error) = self.error {
            return Err(Error::contract_view(method, error));
        }
        let bytes = self
            .result
            .ok_or_else(|| Error::contract_view(method, "empty result"))?;
        serde_json::from_slice(&bytes).map_err(|e| {
            Error::contract_view(method, format!("undecodable return value: {}", e))
        })
    }
}
