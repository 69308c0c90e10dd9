//! Qtum node RPC abstraction.
//!
//! [`QtumRpc`] is the capability the translation engine talks to;
//! [`QtumClient`] implements it over HTTP and `mock::MockQtum` serves
//! canned responses in tests.

mod client;
#[cfg(test)]
pub mod mock;
pub mod types;

pub use client::QtumClient;
pub use types::*;

use async_trait::async_trait;

/// Node RPC error code for unknown or non-wallet transactions.
pub const RPC_INVALID_ADDRESS_OR_KEY: i64 = -5;

#[derive(Debug, thiserror::Error)]
pub enum QtumError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl QtumError {
    /// Build an error from a node JSON-RPC error object.
    pub fn from_rpc(code: i64, message: String) -> Self {
        if code == RPC_INVALID_ADDRESS_OR_KEY {
            Self::NotFound(message)
        } else {
            Self::Rpc { code, message }
        }
    }
}

/// The Qtum node RPC methods the gateway needs.
#[async_trait]
pub trait QtumRpc: Send + Sync {
    /// `gettransaction`: full record, only for wallet-recognized transactions.
    async fn get_transaction(&self, txid: &str) -> Result<GetTransactionResponse, QtumError>;

    /// `getrawtransaction <txid> true`: reduced record for any chain transaction.
    async fn get_raw_transaction(&self, txid: &str)
        -> Result<GetRawTransactionResponse, QtumError>;

    /// `decoderawtransaction`
    async fn decode_raw_transaction(&self, hex: &str)
        -> Result<DecodedRawTransaction, QtumError>;

    async fn get_blockchain_info(&self) -> Result<BlockchainInfo, QtumError>;

    async fn get_block_count(&self) -> Result<u64, QtumError>;

    /// `getblock <hash>` at verbosity 1 (transaction ids only).
    async fn get_block(&self, block_hash: &str) -> Result<BlockResponse, QtumError>;

    async fn get_network_info(&self) -> Result<NetworkInfo, QtumError>;
}
