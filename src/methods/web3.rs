use async_trait::async_trait;
use serde_json::Value;
use sha3::{Digest, Keccak256};
use tracing::debug;

use crate::error::TransformError;
use crate::transformer::EthProxy;
use crate::types::{remove_hex_prefix, JsonRpcRequest};

/// Handler for web3_clientVersion
pub struct Web3ClientVersion;

#[async_trait]
impl EthProxy for Web3ClientVersion {
    fn method(&self) -> &'static str {
        "web3_clientVersion"
    }

    async fn request(&self, _request: &JsonRpcRequest) -> Result<Value, TransformError> {
        let version = format!("QtumEthRpc/{}", env!("CARGO_PKG_VERSION"));
        debug!("web3_clientVersion -> {}", version);
        Ok(Value::String(version))
    }
}

/// Handler for web3_sha3
/// Returns the Keccak-256 hash of the given data.
pub struct Web3Sha3;

#[async_trait]
impl EthProxy for Web3Sha3 {
    fn method(&self) -> &'static str {
        "web3_sha3"
    }

    async fn request(&self, request: &JsonRpcRequest) -> Result<Value, TransformError> {
        let data_hex: String = request.param(0)?;
        let data_bytes =
            hex::decode(remove_hex_prefix(&data_hex)).map_err(|e| TransformError::Decode {
                value: data_hex.clone(),
                reason: e.to_string(),
            })?;

        let hash = Keccak256::digest(&data_bytes);
        let result = format!("0x{}", hex::encode(hash));

        debug!("web3_sha3: input_len={} -> {}", data_bytes.len(), result);
        Ok(Value::String(result))
    }
}
