use axum::{
    routing::{any_service, get, post},
    Router,
};
use std::sync::Arc;

use crate::infra::runtime::mcp_transport;
use crate::tools::mcp_router;
use crate::tools::registry::ToolRegistry;

/// Default app: `/healthz` + streamable MCP at `/mcp`.
pub fn build_app_default() -> Router {
    let session_mgr = Arc::new(mcp_transport::LocalSessionManager::default());
    let mcp_service =
        mcp_transport::make_streamable_http_service(mcp_router::factory_from_env, session_mgr);

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route_service("/mcp", any_service(mcp_service))
}

/// Default app **plus** the deprecated JSON-RPC shim at `/v1/tools`.
pub fn build_app_with_deprecated_api(registry: ToolRegistry) -> Router {
    let session_mgr = Arc::new(mcp_transport::LocalSessionManager::default());
    let mcp_service =
        mcp_transport::make_streamable_http_service(mcp_router::factory_from_env, session_mgr);

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route_service("/mcp", any_service(mcp_service))
        .route("/v1/tools", post(crate::api::mcp::http))
        .with_state(registry)
}
