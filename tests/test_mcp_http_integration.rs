use std::sync::Arc;

use axum::{routing::any_service, Router};
use http_body_util::BodyExt; // for .collect
use hyper::{header, Request, StatusCode};
use serde_json::{json, Value};
use tokio::time::{timeout, Duration};
use tower::ServiceExt; // for .oneshot

use supersearch_mcp_gateway::clients::supersearch::SupersearchRemote;
use supersearch_mcp_gateway::infra::runtime::mcp_transport;
use supersearch_mcp_gateway::tools::mcp_router::UnifiedSvc;
use supersearch_mcp_gateway::tools::registry::build_registry_with;

static MCP_PROTOCOL_VERSION: &str = "0.5";

fn mcp_app(api_base: String) -> Router {
    let factory = move || {
        let registry = build_registry_with(SupersearchRemote::new(api_base.clone(), "test-key"));
        (UnifiedSvc::new(registry), UnifiedSvc::router())
    };
    let session_mgr = Arc::new(mcp_transport::LocalSessionManager::default());
    let svc = mcp_transport::make_streamable_http_service(factory, session_mgr);
    Router::new().route_service("/mcp", any_service(svc))
}

fn post_frame(session_id: Option<&str>, body: &Value) -> Request<axum::body::Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header(header::ACCEPT, "application/json, text/event-stream")
        .header(header::CONTENT_TYPE, "application/json")
        .header("MCP-Protocol-Version", MCP_PROTOCOL_VERSION);
    if let Some(sid) = session_id {
        builder = builder.header("MCP-Session-Id", sid);
    }
    builder.body(axum::body::Body::from(body.to_string())).unwrap()
}

async fn sse_result(res: axum::response::Response) -> Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let s = String::from_utf8_lossy(&bytes);
    s.lines()
        .find_map(|line| line.strip_prefix("data: ").map(|d| d.to_string()))
        .and_then(|d| serde_json::from_str::<Value>(&d).ok())
        .expect("no rpc response frame in SSE body")
}

#[tokio::test]
async fn initialize_list_and_call_status_over_streamable_http() {
    let server = httpmock::MockServer::start();
    server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/supersearch-enrichment/r-123")
            .header("authorization", "Bearer test-key");
        then.status(200)
            .json_body(json!({"status": "running", "leads_enriched": 7}));
    });

    let app = mcp_app(server.base_url());

    // Initialize
    let init = json!({
        "jsonrpc":"2.0","id":1,"method":"initialize",
        "params":{ "protocolVersion":"2025-03-26","capabilities":{},"clientInfo":{"name":"test","version":"0.1"} }
    });
    let init_res = app.clone().oneshot(post_frame(None, &init)).await.unwrap();
    assert!(init_res.status().is_success());
    let session_id = init_res
        .headers()
        .get("MCP-Session-Id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();

    // notifications/initialized
    let initialized =
        json!({"jsonrpc":"2.0","method":"notifications/initialized","params":{}});
    let res = app
        .clone()
        .oneshot(post_frame(Some(&session_id), &initialized))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::ACCEPTED);

    // tools/list
    let list = json!({"jsonrpc":"2.0","id":2,"method":"tools/list","params":{}});
    let list_res = timeout(
        Duration::from_secs(20),
        app.clone().oneshot(post_frame(Some(&session_id), &list)),
    )
    .await
    .unwrap()
    .unwrap();
    assert!(list_res.status().is_success());
    let list_v = sse_result(list_res).await;
    let tools = list_v["result"]["tools"].as_array().expect("tools array");
    assert_eq!(tools.len(), 9);

    // tools/call
    let call = json!({
        "jsonrpc":"2.0","id":3,"method":"tools/call",
        "params": {"name":"supersearch.get_enrichment_status","arguments":{"resource_id":"r-123"}}
    });
    let call_res = app
        .clone()
        .oneshot(post_frame(Some(&session_id), &call))
        .await
        .unwrap();
    assert!(call_res.status().is_success());
    let v = sse_result(call_res).await;
    assert_eq!(v["result"]["structuredContent"]["status"], "running");
    assert_eq!(v["result"]["structuredContent"]["leads_enriched"], 7);
}

#[tokio::test]
async fn count_call_sends_normalized_filters_over_the_wire() {
    let server = httpmock::MockServer::start();
    let m = server.mock(|when, then| {
        when.method(httpmock::Method::POST)
            .path("/supersearch-enrichment/count-leads-from-supersearch")
            .json_body(json!({
                "search_filters": {
                    "title": { "include": ["CEO"] },
                    "skip_owned_leads": false,
                    "show_one_lead_per_company": false
                }
            }));
        then.status(200).json_body(json!({"count": 42}));
    });

    let app = mcp_app(server.base_url());

    let init = json!({
        "jsonrpc":"2.0","id":1,"method":"initialize",
        "params":{ "protocolVersion":"2025-03-26","capabilities":{},"clientInfo":{"name":"test","version":"0.1"} }
    });
    let init_res = app.clone().oneshot(post_frame(None, &init)).await.unwrap();
    let session_id = init_res
        .headers()
        .get("MCP-Session-Id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();
    let initialized =
        json!({"jsonrpc":"2.0","method":"notifications/initialized","params":{}});
    let _ = app
        .clone()
        .oneshot(post_frame(Some(&session_id), &initialized))
        .await
        .unwrap();

    // camelCase alias on input, snake_case on the wire
    let call = json!({
        "jsonrpc":"2.0","id":2,"method":"tools/call",
        "params": {
            "name":"supersearch.count_leads",
            "arguments":{"search_filters":{"title":{"include":["CEO"]},"skipOwnedLeads":false}}
        }
    });
    let call_res = app
        .clone()
        .oneshot(post_frame(Some(&session_id), &call))
        .await
        .unwrap();
    assert!(call_res.status().is_success());
    let v = sse_result(call_res).await;
    m.assert();
    assert_eq!(v["result"]["structuredContent"]["response"]["count"], 42);
}
