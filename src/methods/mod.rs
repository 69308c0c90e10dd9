//! Registered Ethereum method handlers, grouped by namespace.

pub mod eth;
pub mod net;
pub mod web3;

use std::sync::Arc;

use crate::qtum::QtumRpc;
use crate::transformer::EthProxy;

/// The proxies the gateway serves by default.
pub fn default_proxies(qtum: Arc<dyn QtumRpc>) -> Vec<Arc<dyn EthProxy>> {
    vec![
        Arc::new(eth::ProxyEthChainId { qtum: qtum.clone() }),
        Arc::new(eth::ProxyEthBlockNumber { qtum: qtum.clone() }),
        Arc::new(eth::ProxyEthGasPrice),
        Arc::new(eth::ProxyEthGetTransactionByHash { qtum: qtum.clone() }),
        Arc::new(net::ProxyNetVersion { qtum: qtum.clone() }),
        Arc::new(net::ProxyNetListening { qtum }),
        Arc::new(web3::Web3ClientVersion),
        Arc::new(web3::Web3Sha3),
    ]
}
