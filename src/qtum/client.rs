use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, error};

use super::types::*;
use super::{QtumError, QtumRpc};

/// Client wrapper for Qtum node RPC calls.
pub struct QtumClient {
    http_client: Client,
    rpc_url: String,
    auth: Option<(String, String)>,
    next_id: AtomicU64,
}

impl QtumClient {
    /// Create a new Qtum RPC client. Basic auth is used when a user is given.
    pub fn new(rpc_url: &str, user: Option<&str>, password: Option<&str>) -> Self {
        Self {
            http_client: Client::new(),
            rpc_url: rpc_url.to_string(),
            auth: user.map(|u| (u.to_string(), password.unwrap_or_default().to_string())),
            next_id: AtomicU64::new(1),
        }
    }

    /// Get the node RPC URL.
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Send a JSON-RPC request to the node and decode its result.
    async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T, QtumError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!(rpc.id = id, rpc.method = method, "qtum rpc request");

        let request = QtumRpcRequest {
            jsonrpc: "1.0",
            id,
            method,
            params,
        };

        let mut builder = self.http_client.post(&self.rpc_url).json(&request);
        if let Some((user, password)) = &self.auth {
            builder = builder.basic_auth(user, Some(password));
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        // qtumd reports RPC errors with a JSON body and HTTP 500, so the body
        // is decoded before the status is judged.
        let rpc_response: QtumRpcResponse = match serde_json::from_str(&body) {
            Ok(decoded) => decoded,
            Err(e) => {
                error!("Qtum RPC returned HTTP {}: {}", status, body);
                return Err(QtumError::InvalidResponse(format!(
                    "{method}: HTTP {status}: {e}"
                )));
            }
        };

        if let Some(err) = rpc_response.error {
            debug!(
                rpc.id = id,
                rpc.method = method,
                code = err.code,
                "qtum rpc error: {}",
                err.message
            );
            return Err(QtumError::from_rpc(err.code, err.message));
        }

        let result = rpc_response
            .result
            .ok_or_else(|| QtumError::InvalidResponse(format!("no result in {method} response")))?;
        serde_json::from_value(result)
            .map_err(|e| QtumError::InvalidResponse(format!("failed to parse {method} response: {e}")))
    }
}

#[async_trait]
impl QtumRpc for QtumClient {
    async fn get_transaction(&self, txid: &str) -> Result<GetTransactionResponse, QtumError> {
        self.request("gettransaction", vec![json!(txid)]).await
    }

    async fn get_raw_transaction(
        &self,
        txid: &str,
    ) -> Result<GetRawTransactionResponse, QtumError> {
        self.request("getrawtransaction", vec![json!(txid), json!(true)])
            .await
    }

    async fn decode_raw_transaction(
        &self,
        hex: &str,
    ) -> Result<DecodedRawTransaction, QtumError> {
        self.request("decoderawtransaction", vec![json!(hex)]).await
    }

    async fn get_blockchain_info(&self) -> Result<BlockchainInfo, QtumError> {
        self.request("getblockchaininfo", Vec::new()).await
    }

    async fn get_block_count(&self) -> Result<u64, QtumError> {
        self.request("getblockcount", Vec::new()).await
    }

    async fn get_block(&self, block_hash: &str) -> Result<BlockResponse, QtumError> {
        self.request("getblock", vec![json!(block_hash), json!(1)])
            .await
    }

    async fn get_network_info(&self) -> Result<NetworkInfo, QtumError> {
        self.request("getnetworkinfo", Vec::new()).await
    }
}
