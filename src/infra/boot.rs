use std::net::SocketAddr;

use crate::infra::config::Config;

pub async fn run_server() -> anyhow::Result<()> {
    let cfg = Config::from_env();
    tracing::info!(
        mode = %cfg.mode,
        port = cfg.port,
        deprecate_rest = cfg.deprecate_rest,
        "BOOT supersearch-mcp-gateway"
    );

    // Stdio mode: run MCP over stdio ONLY (no HTTP).
    if cfg.mode == "stdio" {
        crate::infra::runtime::mcp_transport::serve_stdio(
            crate::tools::mcp_router::factory_from_env,
        )
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    let app = if cfg.deprecate_rest {
        crate::infra::http_app::build_app_default()
    } else {
        let registry = crate::tools::registry::build_registry_from_env();
        crate::infra::http_app::build_app_with_deprecated_api(registry)
    };

    let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
