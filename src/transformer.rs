//! Method registry and dispatcher.
//!
//! Each Ethereum method is served by one [`EthProxy`]; the [`Transformer`]
//! maps method names to proxies once at startup and routes every call.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::TransformError;
use crate::qtum::QtumRpc;
use crate::types::JsonRpcRequest;

/// Handler for a single Ethereum JSON-RPC method.
#[async_trait]
pub trait EthProxy: Send + Sync {
    /// The Ethereum method name this proxy serves.
    fn method(&self) -> &'static str;

    async fn request(&self, request: &JsonRpcRequest) -> Result<Value, TransformError>;
}

pub struct Transformer {
    qtum: Arc<dyn QtumRpc>,
    debug_mode: bool,
    proxies: HashMap<&'static str, Arc<dyn EthProxy>>,
}

impl Transformer {
    pub fn builder() -> TransformerBuilder {
        TransformerBuilder {
            qtum: None,
            debug_mode: false,
            proxies: Vec::new(),
        }
    }

    /// Register `proxy` under its method name. A name can only be taken once.
    pub fn register(&mut self, proxy: Arc<dyn EthProxy>) -> Result<(), TransformError> {
        let method = proxy.method();
        if self.proxies.contains_key(method) {
            return Err(TransformError::DuplicateMethod(method.to_string()));
        }
        self.proxies.insert(method, proxy);
        Ok(())
    }

    /// Route `request` to its proxy and return the proxy's result unchanged.
    pub async fn transform(&self, request: &JsonRpcRequest) -> Result<Value, TransformError> {
        let proxy = self.proxy(&request.method)?;

        if self.debug_mode {
            let params = Value::Array(request.params.clone());
            info!(method = %request.method, params = %params, "dispatching request");
        } else {
            debug!(method = %request.method, "dispatching request");
        }

        let result = proxy.request(request).await;

        if self.debug_mode {
            match &result {
                Ok(value) => info!(method = %request.method, result = %value, "request done"),
                Err(e) => info!(method = %request.method, error = %e, "request failed"),
            }
        }
        result
    }

    fn proxy(&self, method: &str) -> Result<&Arc<dyn EthProxy>, TransformError> {
        self.proxies
            .get(method)
            .ok_or_else(|| TransformError::UnsupportedMethod(method.to_string()))
    }

    /// Registered method names, sorted.
    pub fn methods(&self) -> Vec<&'static str> {
        let mut methods: Vec<_> = self.proxies.keys().copied().collect();
        methods.sort_unstable();
        methods
    }

    /// The node client the proxies were built around.
    pub fn qtum(&self) -> &Arc<dyn QtumRpc> {
        &self.qtum
    }
}

pub struct TransformerBuilder {
    qtum: Option<Arc<dyn QtumRpc>>,
    debug_mode: bool,
    proxies: Vec<Arc<dyn EthProxy>>,
}

impl TransformerBuilder {
    pub fn qtum(mut self, qtum: Arc<dyn QtumRpc>) -> Self {
        self.qtum = Some(qtum);
        self
    }

    pub fn proxy(mut self, proxy: Arc<dyn EthProxy>) -> Self {
        self.proxies.push(proxy);
        self
    }

    pub fn proxies(mut self, proxies: impl IntoIterator<Item = Arc<dyn EthProxy>>) -> Self {
        self.proxies.extend(proxies);
        self
    }

    /// Log every request and result at info level.
    pub fn debug_mode(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self
    }

    /// Fails without a node client, or when two proxies share a method name.
    pub fn build(self) -> Result<Transformer, TransformError> {
        let qtum = self.qtum.ok_or(TransformError::MissingClient)?;
        let mut transformer = Transformer {
            qtum,
            debug_mode: self.debug_mode,
            proxies: HashMap::with_capacity(self.proxies.len()),
        };
        for proxy in self.proxies {
            transformer.register(proxy)?;
        }
        Ok(transformer)
    }
}
