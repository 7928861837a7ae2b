//! Deprecated JSON-RPC REST shim over the tool registry. The MCP streamable
//! HTTP endpoint at /mcp is the supported surface.

use axum::Json;
use serde_json::{json, Value as J};

use crate::core::error::GatewayError;
use crate::core::mcp::{RpcReq, RpcResp};
use crate::infra::http::json as http_json;
use crate::tools::registry::ToolRegistry;

fn tools_list(reg: &ToolRegistry) -> J {
    let tools: Vec<J> = reg
        .list()
        .into_iter()
        .map(|t| {
            json!({
                "name": t.name,
                "category": t.category,
                "description": t.description,
                "inputSchema": t.input_schema
            })
        })
        .collect();
    json!({ "tools": tools })
}

async fn call_tool(reg: &ToolRegistry, params: &J) -> Result<J, GatewayError> {
    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| GatewayError::invalid("missing tool name"))?;
    let args = params.get("arguments").unwrap_or(&J::Null).clone();
    reg.call(name, &args).await
}

pub async fn http(
    axum::extract::State(reg): axum::extract::State<ToolRegistry>,
    body: String,
) -> Json<RpcResp> {
    let req: RpcReq = match serde_json::from_str(&body) {
        Ok(r) => r,
        Err(e) => return http_json::parse_error(e.to_string()),
    };
    let id = req.id.clone();
    let resp = match req.method.as_str() {
        "initialize" => http_json::ok(
            id.clone(),
            json!({ "serverInfo": { "name": "supersearch-mcp-gateway", "version": env!("CARGO_PKG_VERSION") }, "capabilities": {} }),
        )
        .0,
        "shutdown" => http_json::ok(id.clone(), J::Null).0,
        "tools.list" | "tools/list" => http_json::ok(id.clone(), tools_list(&reg)).0,
        "tools.call" | "tools/call" => match call_tool(&reg, &req.params).await {
            Ok(out) => http_json::ok(id.clone(), out).0,
            Err(e) => http_json::from_gateway_error(id.clone(), e).0,
        },
        _ => http_json::error(id.clone(), -32601, format!("unknown method: {}", req.method)).0,
    };
    Json(resp)
}
