use crate::qtum::QtumError;

/// JSON-RPC error code for an unknown method.
pub const METHOD_NOT_FOUND: i32 = -32601;
/// JSON-RPC error code for bad parameters.
pub const INVALID_PARAMS: i32 = -32602;
/// JSON-RPC error code for gateway-internal failures.
pub const INTERNAL_ERROR: i32 = -32603;
/// Server error code used when the Qtum node (or its data) is at fault.
pub const UPSTREAM_ERROR: i32 = -32000;

/// Every failure the translation engine can report.
///
/// Variants are split between problems with the caller's request
/// ([`TransformError::is_client_error`]) and problems with the node or the
/// gateway itself, so the transport layer can pick a protocol error code.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("unsupported method {0}")]
    UnsupportedMethod(String),

    #[error("method already exists: {0}")]
    DuplicateMethod(String),

    #[error("qtum client is required")]
    MissingClient,

    #[error("invalid params: {0}")]
    InvalidParams(String),

    #[error("cannot decode hex value {value:?}: {reason}")]
    Decode { value: String, reason: String },

    #[error("amount conversion failed: {0}")]
    Conversion(String),

    #[error("malformed contract script: {0}")]
    MalformedScript(String),

    #[error("{op} failed: {source}")]
    Upstream {
        op: &'static str,
        #[source]
        source: QtumError,
    },
}

impl TransformError {
    /// Wrap a node client error with the name of the step that issued it.
    pub fn upstream(op: &'static str) -> impl FnOnce(QtumError) -> Self {
        move |source| Self::Upstream { op, source }
    }

    /// True when the request itself is at fault rather than the node or the gateway.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedMethod(_) | Self::InvalidParams(_) | Self::Decode { .. }
        )
    }

    /// JSON-RPC error code for this failure.
    pub fn code(&self) -> i32 {
        match self {
            Self::UnsupportedMethod(_) => METHOD_NOT_FOUND,
            Self::InvalidParams(_) | Self::Decode { .. } => INVALID_PARAMS,
            Self::Upstream { .. } | Self::MalformedScript(_) => UPSTREAM_ERROR,
            Self::DuplicateMethod(_) | Self::MissingClient | Self::Conversion(_) => INTERNAL_ERROR,
        }
    }
}
