use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::TransformError;
use crate::qtum::{QtumError, QtumRpc};
use crate::transformer::EthProxy;
use crate::types::JsonRpcRequest;

/// Ethereum network id for a Qtum chain name as reported by getblockchaininfo.
pub fn network_id(chain: &str) -> Result<u64, TransformError> {
    match chain {
        "main" => Ok(0x51),
        "test" => Ok(0x22b9),
        "regtest" => Ok(0x1024),
        other => Err(TransformError::Upstream {
            op: "get blockchain info",
            source: QtumError::InvalidResponse(format!("unknown chain {other:?}")),
        }),
    }
}

/// Look up the node's chain and map it to a hex network id.
pub async fn chain_network_id(qtum: &dyn QtumRpc) -> Result<String, TransformError> {
    let info = qtum
        .get_blockchain_info()
        .await
        .map_err(TransformError::upstream("get blockchain info"))?;
    Ok(format!("0x{:x}", network_id(&info.chain)?))
}

/// Handler for net_version
pub struct ProxyNetVersion {
    pub qtum: Arc<dyn QtumRpc>,
}

#[async_trait]
impl EthProxy for ProxyNetVersion {
    fn method(&self) -> &'static str {
        "net_version"
    }

    async fn request(&self, _request: &JsonRpcRequest) -> Result<Value, TransformError> {
        let version = chain_network_id(self.qtum.as_ref()).await?;
        debug!("net_version -> {}", version);
        Ok(Value::String(version))
    }
}

/// Handler for net_listening
/// Reports whether the node's P2P networking is active.
pub struct ProxyNetListening {
    pub qtum: Arc<dyn QtumRpc>,
}

#[async_trait]
impl EthProxy for ProxyNetListening {
    fn method(&self) -> &'static str {
        "net_listening"
    }

    async fn request(&self, _request: &JsonRpcRequest) -> Result<Value, TransformError> {
        let info = self
            .qtum
            .get_network_info()
            .await
            .map_err(TransformError::upstream("get network info"))?;
        Ok(Value::Bool(info.networkactive))
    }
}
