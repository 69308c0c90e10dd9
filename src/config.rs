use anyhow::{Context, Result};
use std::env;

/// Gateway configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Qtum node RPC endpoint URL
    pub qtum_rpc_url: String,
    /// Qtum node RPC user (basic auth)
    pub qtum_rpc_user: Option<String>,
    /// Qtum node RPC password (basic auth)
    pub qtum_rpc_password: Option<String>,
    /// RPC server port
    pub gateway_port: u16,
    /// Log every dispatched request and its result
    pub debug: bool,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    /// Call dotenvy::dotenv() before calling this.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let qtum_rpc_url =
            lookup("QTUM_RPC_URL").unwrap_or_else(|| "http://127.0.0.1:3889".to_string());

        let qtum_rpc_user = lookup("QTUM_RPC_USER").filter(|u| !u.is_empty());
        let qtum_rpc_password = lookup("QTUM_RPC_PASSWORD");

        let gateway_port: u16 = lookup("GATEWAY_PORT")
            .unwrap_or_else(|| "23889".to_string())
            .parse()
            .context("GATEWAY_PORT must be a valid u16")?;

        let debug = match lookup("GATEWAY_DEBUG").as_deref() {
            None | Some("") | Some("0") | Some("false") => false,
            Some("1") | Some("true") => true,
            Some(other) => anyhow::bail!("GATEWAY_DEBUG must be true/false/1/0, got {other:?}"),
        };

        let log_level = lookup("RUST_LOG").unwrap_or_else(|| "info".to_string());

        Ok(Config {
            qtum_rpc_url,
            qtum_rpc_user,
            qtum_rpc_password,
            gateway_port,
            debug,
            log_level,
        })
    }
}
