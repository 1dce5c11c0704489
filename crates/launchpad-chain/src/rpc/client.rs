//! HTTP client for NEAR view calls.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use launchpad_core::prelude::*;

use super::protocol::{CallFunctionResult, RpcRequest, RpcResponse};

/// Build the shared `reqwest` client with the configured request timeout.
pub fn build_http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::http(format!("failed to create HTTP client: {}", e)))
}

/// Map a transport failure to [`Error::Http`], keeping timeouts recognisable.
pub(crate) fn http_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::http(format!("request timed out: {}", e))
    } else if e.is_connect() {
        Error::http(format!("endpoint unavailable: {}", e))
    } else {
        Error::http(e.to_string())
    }
}

/// Read-only NEAR RPC client
#[derive(Debug)]
pub struct NearRpcClient {
    client: Client,
    url: String,
    next_id: AtomicU64,
}

impl NearRpcClient {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Execute a `call_function` view and decode its JSON return value.
    ///
    /// # Errors
    ///
    /// - [`Error::Http`] on transport failure or a non-success status.
    /// - [`Error::Rpc`] when the node returns a JSON-RPC error object.
    /// - [`Error::ContractView`] when the contract panics or returns
    ///   something that does not decode as `T`.
    pub async fn view<T: DeserializeOwned>(
        &self,
        contract: &str,
        method: &str,
        args: Value,
    ) -> Result<T> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed).to_string();
        let request = RpcRequest::call_function(id, contract, method, &args)?;

        debug!("view {}.{} {}", contract, method, args);

        let response: RpcResponse = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(http_error)?
            .error_for_status()
            .map_err(http_error)?
            .json()
            .await
            .map_err(http_error)?;

        let result = response.into_result()?;
        let call: CallFunctionResult = serde_json::from_value(result)
            .map_err(|e| Error::rpc(format!("unexpected query result shape: {}", e)))?;

        if !call.logs.is_empty() {
            trace!("{} logs: {:?}", method, call.logs);
        }

        call.decode(method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Answer a single HTTP request with `body` as JSON. The handle yields
    /// the raw request that was received.
    async fn serve_once(body: Value) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                raw.extend_from_slice(&chunk[..n]);
                let text = String::from_utf8_lossy(&raw).to_string();
                if let Some(end) = text.find("\r\n\r\n") {
                    let length = text[..end]
                        .lines()
                        .find_map(|l| {
                            let (name, value) = l.split_once(':')?;
                            if name.eq_ignore_ascii_case("content-length") {
                                value.trim().parse::<usize>().ok()
                            } else {
                                None
                            }
                        })
                        .unwrap_or(0);
                    if raw.len() >= end + 4 + length {
                        break;
                    }
                }
                if n == 0 {
                    break;
                }
            }

            let payload = body.to_string();
            let response = format!(
                concat!(
                    "HTTP/1.1 200 OK\r\n",
                    "content-type: application/json\r\n",
                    "content-length: {}\r\n",
                    "connection: close\r\n\r\n{}"
                ),
                payload.len(),
                payload
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&raw).to_string()
        });

        (url, handle)
    }

    fn client(url: &str) -> NearRpcClient {
        NearRpcClient::new(build_http_client(Duration::from_secs(2)).unwrap(), url)
    }

    #[tokio::test]
    async fn test_view_decodes_result_bytes() {
        let bytes = serde_json::to_vec(&"500").unwrap();
        let (url, server) = serve_once(json!({
            "jsonrpc": "2.0",
            "id": "1",
            "result": { "result": bytes, "logs": [], "block_height": 42 }
        }))
        .await;

        let allowance: String = client(&url)
            .view(
                "launchpad.testnet",
                "view_allowance_raw",
                json!({ "account_id": "alice.testnet", "listing_id": 1 }),
            )
            .await
            .unwrap();
        assert_eq!(allowance, "500");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST / "));
        assert!(request.contains("\"call_function\""));
        assert!(request.contains("\"view_allowance_raw\""));
    }

    #[tokio::test]
    async fn test_view_reports_contract_panic() {
        let (url, server) = serve_once(json!({
            "jsonrpc": "2.0",
            "id": "1",
            "result": { "error": "wasm execution failed: listing not found", "logs": [] }
        }))
        .await;

        let err = client(&url)
            .view::<String>("launchpad.testnet", "view_allowance_raw", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::ContractView { ref method, .. } if method == "view_allowance_raw"
        ));
        server.await.unwrap();
    }
}
