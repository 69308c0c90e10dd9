//! Ethereum-side wire types.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TransformError;

/// Placeholder for addresses the Qtum data does not determine.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// An inbound Ethereum JSON-RPC call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default = "default_jsonrpc")]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Value,
    pub method: String,
    #[serde(default)]
    pub params: Vec<Value>,
}

fn default_jsonrpc() -> String {
    "2.0".to_string()
}

impl JsonRpcRequest {
    pub fn new(id: impl Into<Value>, method: &str, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: default_jsonrpc(),
            id: id.into(),
            method: method.to_string(),
            params,
        }
    }

    /// Deserialize the positional parameter at `index`.
    pub fn param<T: DeserializeOwned>(&self, index: usize) -> Result<T, TransformError> {
        let value = self.params.get(index).ok_or_else(|| {
            TransformError::InvalidParams(format!(
                "{} requires parameter {}",
                self.method, index
            ))
        })?;
        serde_json::from_value(value.clone()).map_err(|e| {
            TransformError::InvalidParams(format!("{} parameter {}: {}", self.method, index, e))
        })
    }
}

/// EVM-formatted transaction object returned by `eth_getTransactionByHash`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthTransaction {
    pub hash: String,
    pub nonce: String,
    /// `None` while the transaction is in the mempool.
    pub block_hash: Option<String>,
    pub block_number: String,
    pub transaction_index: String,
    pub from: String,
    pub to: String,
    pub value: String,
    pub gas_price: String,
    pub gas: String,
    pub input: String,
}

/// The `eth_sendTransaction` call object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTransactionRequest {
    pub from: String,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub gas: Option<String>,
    #[serde(default)]
    pub gas_price: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
}

impl SendTransactionRequest {
    /// Gas limit as hex text; empty when absent.
    pub fn gas_hex(&self) -> &str {
        self.gas.as_deref().unwrap_or_default()
    }

    /// Gas price as hex text; empty when absent.
    pub fn gas_price_hex(&self) -> &str {
        self.gas_price.as_deref().unwrap_or_default()
    }
}

/// Prefix `value` with `0x` unless it already has one.
pub fn add_hex_prefix(value: &str) -> String {
    if value.starts_with("0x") || value.starts_with("0X") {
        value.to_string()
    } else {
        format!("0x{value}")
    }
}

/// Strip a leading `0x`/`0X`.
pub fn remove_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}
