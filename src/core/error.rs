use thiserror::Error;

/// Gateway-wide error model for uniform JSON-RPC/MCP mapping.
///
/// `InvalidParams` is raised before anything touches the wire;
/// `Upstream` wraps transport or remote-status failures.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid params: {0}")]
    InvalidParams(String),
    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl GatewayError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        GatewayError::InvalidParams(msg.into())
    }
}
