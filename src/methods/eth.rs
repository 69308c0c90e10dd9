use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::net::chain_network_id;
use crate::error::TransformError;
use crate::qtum::{GetRawTransactionResponse, QtumError, QtumRpc};
use crate::transformer::EthProxy;
use crate::translator::{qtum_amount_to_eth_value, translate_with_raw, MIN_GAS_PRICE};
use crate::types::{remove_hex_prefix, JsonRpcRequest};

/// Handler for eth_chainId
pub struct ProxyEthChainId {
    pub qtum: Arc<dyn QtumRpc>,
}

#[async_trait]
impl EthProxy for ProxyEthChainId {
    fn method(&self) -> &'static str {
        "eth_chainId"
    }

    async fn request(&self, _request: &JsonRpcRequest) -> Result<Value, TransformError> {
        let id = chain_network_id(self.qtum.as_ref()).await?;
        debug!("eth_chainId -> {}", id);
        Ok(Value::String(id))
    }
}

/// Handler for eth_blockNumber
pub struct ProxyEthBlockNumber {
    pub qtum: Arc<dyn QtumRpc>,
}

#[async_trait]
impl EthProxy for ProxyEthBlockNumber {
    fn method(&self) -> &'static str {
        "eth_blockNumber"
    }

    async fn request(&self, _request: &JsonRpcRequest) -> Result<Value, TransformError> {
        let height = self
            .qtum
            .get_block_count()
            .await
            .map_err(TransformError::upstream("get block count"))?;
        let hex = format!("0x{height:x}");
        debug!("eth_blockNumber -> {} (height {})", hex, height);
        Ok(Value::String(hex))
    }
}

/// Handler for eth_gasPrice
/// Always the gateway's minimum gas price.
pub struct ProxyEthGasPrice;

#[async_trait]
impl EthProxy for ProxyEthGasPrice {
    fn method(&self) -> &'static str {
        "eth_gasPrice"
    }

    async fn request(&self, _request: &JsonRpcRequest) -> Result<Value, TransformError> {
        Ok(Value::String(qtum_amount_to_eth_value(MIN_GAS_PRICE)?))
    }
}

/// Handler for eth_getTransactionByHash
pub struct ProxyEthGetTransactionByHash {
    pub qtum: Arc<dyn QtumRpc>,
}

/// Where a transaction sits in the chain, plus the raw record used to find it.
struct Located {
    raw: GetRawTransactionResponse,
    block_number: u64,
    tx_index: u64,
}

impl ProxyEthGetTransactionByHash {
    /// Height of the containing block and the transaction's position in it.
    /// Mempool transactions report (0, 0).
    async fn locate(&self, txid: &str) -> Result<Option<Located>, TransformError> {
        let raw = match self.qtum.get_raw_transaction(txid).await {
            Ok(raw) => raw,
            Err(QtumError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(TransformError::upstream("get raw transaction")(e)),
        };
        if raw.blockhash.is_empty() {
            return Ok(Some(Located {
                raw,
                block_number: 0,
                tx_index: 0,
            }));
        }

        let block = self
            .qtum
            .get_block(&raw.blockhash)
            .await
            .map_err(TransformError::upstream("get block"))?;
        let index = block.tx.iter().position(|id| id == txid).ok_or_else(|| {
            TransformError::Upstream {
                op: "get block",
                source: QtumError::InvalidResponse(format!(
                    "block {} does not list transaction {}",
                    block.hash, txid
                )),
            }
        })?;
        Ok(Some(Located {
            raw,
            block_number: block.height,
            tx_index: index as u64,
        }))
    }
}

#[async_trait]
impl EthProxy for ProxyEthGetTransactionByHash {
    fn method(&self) -> &'static str {
        "eth_getTransactionByHash"
    }

    async fn request(&self, request: &JsonRpcRequest) -> Result<Value, TransformError> {
        let hash: String = request.param(0)?;
        let txid = remove_hex_prefix(&hash);
        if txid.len() != 64 || !txid.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TransformError::InvalidParams(format!(
                "transaction hash must be 32 bytes of hex: {hash}"
            )));
        }

        debug!("eth_getTransactionByHash: hash={}", hash);

        let Some(located) = self.locate(txid).await? else {
            return Ok(Value::Null);
        };

        let tx = translate_with_raw(
            self.qtum.as_ref(),
            txid,
            located.raw,
            located.block_number,
            located.tx_index,
        )
        .await?;
        serde_json::to_value(&tx).map_err(|e| TransformError::Conversion(e.to_string()))
    }
}
