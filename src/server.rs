use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use http::Method;
use jsonrpsee::server::{RpcModule, Server};
use jsonrpsee::types::ErrorObjectOwned;
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::TransformError;
use crate::methods::default_proxies;
use crate::qtum::{QtumClient, QtumRpc};
use crate::transformer::Transformer;
use crate::types::JsonRpcRequest;

/// Start the JSON-RPC server.
pub async fn start_server(config: Config) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.gateway_port));

    info!("Starting Qtum Ethereum RPC gateway on {}", addr);

    let client = QtumClient::new(
        &config.qtum_rpc_url,
        config.qtum_rpc_user.as_deref(),
        config.qtum_rpc_password.as_deref(),
    );
    info!("Qtum RPC: {}", client.rpc_url());
    let qtum: Arc<dyn QtumRpc> = Arc::new(client);

    let transformer = Transformer::builder()
        .qtum(qtum.clone())
        .proxies(default_proxies(qtum))
        .debug_mode(config.debug)
        .build()?;

    // Check the node is reachable
    match transformer.qtum().get_blockchain_info().await {
        Ok(chain) => {
            info!("Qtum node: chain={}, blocks={}", chain.chain, chain.blocks);
        }
        Err(e) => {
            warn!("Could not reach Qtum node (requests will fail until it is up): {}", e);
        }
    }

    let module = build_module(transformer)?;

    let cors = CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_origin(Any)
        .allow_headers(Any);
    let middleware = tower::ServiceBuilder::new().layer(cors);

    let server = Server::builder()
        .set_http_middleware(middleware)
        .build(addr)
        .await
        .map_err(|e| anyhow!("Failed to bind server to {}: {}", addr, e))?;

    info!("Qtum Ethereum RPC gateway listening on http://{}", addr);

    let handle = server.start(module);

    // Runs until shutdown signal
    handle.stopped().await;

    info!("Qtum Ethereum RPC gateway stopped");
    Ok(())
}

/// Register every method the transformer serves on a JSON-RPC module.
pub fn build_module(transformer: Transformer) -> Result<RpcModule<Transformer>> {
    let methods = transformer.methods();
    let mut module = RpcModule::new(transformer);

    for method in methods {
        module.register_async_method(method, move |params, ctx, _| async move {
            let p: Vec<Value> = params.parse().unwrap_or_default();
            let request = JsonRpcRequest::new(Value::Null, method, p);
            ctx.transform(&request).await.map_err(rpc_error)
        })?;
    }

    info!("Registered {} RPC methods", module.method_names().count());
    Ok(module)
}

/// Create a jsonrpsee error from a transformer error.
fn rpc_error(err: TransformError) -> ErrorObjectOwned {
    ErrorObjectOwned::owned(err.code(), err.to_string(), None::<()>)
}
