pub mod enrichment;
pub mod mcp_router;
pub mod registry;
pub mod supersearch;

use crate::core::error::GatewayError;

pub(crate) fn parse_args<T: serde::de::DeserializeOwned>(
    args: &serde_json::Value,
) -> Result<T, GatewayError> {
    serde_json::from_value(args.clone()).map_err(|e| GatewayError::InvalidParams(e.to_string()))
}

pub(crate) fn require_resource_id(id: &str) -> Result<(), GatewayError> {
    if id.trim().is_empty() {
        return Err(GatewayError::invalid("resource_id must be non-empty"));
    }
    Ok(())
}
