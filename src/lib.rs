//! Qtum Ethereum RPC Gateway
//!
//! This crate implements a JSON-RPC server that accepts Ethereum-compatible
//! RPC calls (eth_*, net_*, web3_*) and translates them to Qtum node RPC
//! calls. Amounts are bridged between Ethereum hex integers and Qtum's
//! 8-decimal coin amounts, and Qtum transactions are reshaped into EVM
//! transaction objects, including the contract call or creation carried in
//! an output script.
//!
//! # Architecture
//!
//! ```text
//! Wallet / tooling / dApp
//!     |
//!     | eth_* JSON-RPC calls
//!     v
//! Gateway (this crate): Transformer -> EthProxy -> translator
//!     |
//!     | gettransaction / getrawtransaction / decoderawtransaction / ...
//!     v
//! Qtum node (qtumd)
//! ```
//!
//! # Modules
//!
//! - `config` - Environment and configuration management
//! - `error` - Error taxonomy and JSON-RPC error codes
//! - `types` - Ethereum-side request and response types
//! - `qtum` - Qtum node RPC client
//! - `translator` - Unit conversion, script decoding, transaction translation
//! - `transformer` - Method registry and dispatcher
//! - `methods` - Individual RPC method implementations (eth, net, web3)
//! - `server` - JSON-RPC server setup and method registration

pub mod config;
pub mod error;
pub mod methods;
pub mod qtum;
pub mod server;
pub mod transformer;
pub mod translator;
pub mod types;

pub use error::TransformError;
pub use transformer::{EthProxy, Transformer};
