//! NEAR JSON-RPC transport

pub mod client;
pub mod protocol;

pub use client::{build_http_client, NearRpcClient};
pub use protocol::{CallFunctionResult, RpcError, RpcRequest, RpcResponse};
