use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::types::*;
use super::{QtumError, QtumRpc};

/// A mock Qtum node for testing. Returns canned responses populated via
/// the builder pattern; anything not registered behaves like the node's
/// "not found" / "decode failed" errors.
pub struct MockQtum {
    transactions: HashMap<String, GetTransactionResponse>,
    raw_transactions: HashMap<String, GetRawTransactionResponse>,
    decoded: HashMap<String, DecodedRawTransaction>,
    blocks: HashMap<String, BlockResponse>,
    chain_info: BlockchainInfo,
    network_active: bool,
    raw_lookups: AtomicUsize,
}

impl MockQtum {
    pub fn builder() -> MockQtumBuilder {
        MockQtumBuilder {
            transactions: HashMap::new(),
            raw_transactions: HashMap::new(),
            decoded: HashMap::new(),
            blocks: HashMap::new(),
            chain_info: BlockchainInfo {
                chain: "regtest".into(),
                blocks: 100,
                headers: 100,
                bestblockhash: "00".repeat(32),
            },
            network_active: true,
        }
    }

    /// Number of `getrawtransaction` calls served so far.
    pub fn raw_lookups(&self) -> usize {
        self.raw_lookups.load(Ordering::Relaxed)
    }
}

pub struct MockQtumBuilder {
    transactions: HashMap<String, GetTransactionResponse>,
    raw_transactions: HashMap<String, GetRawTransactionResponse>,
    decoded: HashMap<String, DecodedRawTransaction>,
    blocks: HashMap<String, BlockResponse>,
    chain_info: BlockchainInfo,
    network_active: bool,
}

impl MockQtumBuilder {
    pub fn with_transaction(mut self, tx: GetTransactionResponse) -> Self {
        self.transactions.insert(tx.txid.clone(), tx);
        self
    }

    pub fn with_raw_transaction(mut self, tx: GetRawTransactionResponse) -> Self {
        self.raw_transactions.insert(tx.txid.clone(), tx);
        self
    }

    /// Register the decoded form returned for `hex`.
    pub fn with_decoded(mut self, hex: &str, tx: DecodedRawTransaction) -> Self {
        self.decoded.insert(hex.to_string(), tx);
        self
    }

    pub fn with_block(mut self, block: BlockResponse) -> Self {
        self.blocks.insert(block.hash.clone(), block);
        self
    }

    pub fn with_chain_info(mut self, info: BlockchainInfo) -> Self {
        self.chain_info = info;
        self
    }

    pub fn with_network_active(mut self, active: bool) -> Self {
        self.network_active = active;
        self
    }

    pub fn build(self) -> MockQtum {
        MockQtum {
            transactions: self.transactions,
            raw_transactions: self.raw_transactions,
            decoded: self.decoded,
            blocks: self.blocks,
            chain_info: self.chain_info,
            network_active: self.network_active,
            raw_lookups: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl QtumRpc for MockQtum {
    async fn get_transaction(&self, txid: &str) -> Result<GetTransactionResponse, QtumError> {
        self.transactions.get(txid).cloned().ok_or_else(|| {
            QtumError::from_rpc(-5, "Invalid or non-wallet transaction id".into())
        })
    }

    async fn get_raw_transaction(
        &self,
        txid: &str,
    ) -> Result<GetRawTransactionResponse, QtumError> {
        self.raw_lookups.fetch_add(1, Ordering::Relaxed);
        self.raw_transactions.get(txid).cloned().ok_or_else(|| {
            QtumError::from_rpc(
                -5,
                "No such mempool or blockchain transaction. Use gettransaction for wallet transactions."
                    .into(),
            )
        })
    }

    async fn decode_raw_transaction(
        &self,
        hex: &str,
    ) -> Result<DecodedRawTransaction, QtumError> {
        self.decoded.get(hex).cloned().ok_or(QtumError::Rpc {
            code: -22,
            message: "TX decode failed".into(),
        })
    }

    async fn get_blockchain_info(&self) -> Result<BlockchainInfo, QtumError> {
        Ok(self.chain_info.clone())
    }

    async fn get_block_count(&self) -> Result<u64, QtumError> {
        Ok(self.chain_info.blocks)
    }

    async fn get_block(&self, block_hash: &str) -> Result<BlockResponse, QtumError> {
        self.blocks
            .get(block_hash)
            .cloned()
            .ok_or_else(|| QtumError::from_rpc(-5, "Block not found".into()))
    }

    async fn get_network_info(&self) -> Result<NetworkInfo, QtumError> {
        Ok(NetworkInfo {
            version: 180_100,
            subversion: "/Satoshi:0.18.1/".into(),
            networkactive: self.network_active,
            connections: 8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_wallet_transaction_is_not_found() {
        let rpc = MockQtum::builder().build();
        let err = rpc.get_transaction("ff").await.unwrap_err();
        assert!(matches!(err, QtumError::NotFound(_)));
    }

    #[tokio::test]
    async fn with_chain_info_overrides_defaults() {
        let rpc = MockQtum::builder()
            .with_chain_info(BlockchainInfo {
                chain: "main".into(),
                blocks: 800_000,
                headers: 800_000,
                bestblockhash: String::new(),
            })
            .build();
        assert_eq!(rpc.get_block_count().await.unwrap(), 800_000);
        assert_eq!(rpc.get_blockchain_info().await.unwrap().chain, "main");
    }
}
