//! Thin transport client for the SuperSearch enrichment API.
//!
//! Owns base URL, bearer auth, and timeouts. GETs are retried (idempotent);
//! POST/PATCH are sent exactly once — imports and enrichment runs consume
//! credits, so the adapter layer must never see a duplicated mutation.

use std::time::Instant;

use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use thiserror::Error;

use crate::core::error::GatewayError;
use crate::infra::config::ApiConfig;
use crate::infra::http::headers::{add_standard_headers, generate_request_id};
use crate::infra::runtime::limits::{make_http_client, make_http_client_with, retry_async};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("upstream status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<ClientError> for GatewayError {
    fn from(e: ClientError) -> Self {
        GatewayError::Upstream(e.to_string())
    }
}

#[derive(Clone)]
pub struct SupersearchRemote {
    base: String,
    api_key: String,
    http: Client,
    retries: u32,
}

impl SupersearchRemote {
    pub fn new(base: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            api_key: api_key.into(),
            http: make_http_client(),
            retries: 2,
        }
    }

    pub fn from_config(cfg: &ApiConfig) -> Self {
        Self {
            base: cfg.base_url().to_string(),
            api_key: cfg.api_key.clone().unwrap_or_default(),
            http: make_http_client_with(cfg),
            retries: cfg.retries.unwrap_or(2),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base.trim_end_matches('/'), path)
    }

    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ClientError> {
        let url = self.url(path);
        let start = Instant::now();
        let http = self.http.clone();
        let api_key = self.api_key.clone();
        let req_id = generate_request_id();
        let query: Vec<(String, String)> =
            query.iter().map(|(k, v)| ((*k).to_string(), v.clone())).collect();
        let res = retry_async(self.retries, move |_| {
            let http = http.clone();
            let url = url.clone();
            let api_key = api_key.clone();
            let req_id = req_id.clone();
            let query = query.clone();
            async move { send(http.get(url).query(&query), &api_key, req_id).await }
        })
        .await;
        observe("GET", path, start, res.is_err());
        res
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<Value, ClientError> {
        let start = Instant::now();
        let req_id = generate_request_id();
        let res = send(self.http.post(self.url(path)).json(body), &self.api_key, req_id).await;
        observe("POST", path, start, res.is_err());
        res
    }

    pub async fn patch(&self, path: &str, body: &Value) -> Result<Value, ClientError> {
        let start = Instant::now();
        let req_id = generate_request_id();
        let res = send(self.http.patch(self.url(path)).json(body), &self.api_key, req_id).await;
        observe("PATCH", path, start, res.is_err());
        res
    }
}

async fn send(builder: RequestBuilder, api_key: &str, req_id: String) -> Result<Value, ClientError> {
    let (builder, _rid) = add_standard_headers(builder, Some(req_id));
    let builder = if api_key.is_empty() {
        builder
    } else {
        builder.bearer_auth(api_key)
    };
    let resp = builder
        .send()
        .await
        .map_err(|e| ClientError::Request(e.to_string()))?;
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Status {
            status: status.as_u16(),
            body,
        });
    }
    resp.json::<Value>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

fn observe(verb: &str, path: &str, start: Instant, failed: bool) {
    let elapsed_ms = start.elapsed().as_millis() as f64;
    tracing::debug!(verb = verb, path = path, elapsed_ms = elapsed_ms, failed = failed, "supersearch request");
    crate::infra::logging::log_metric("supersearch", "remote_latency_ms", elapsed_ms);
    if failed {
        crate::infra::logging::count_metric("supersearch", "remote_error_total", 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn post_sends_bearer_and_request_id() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(POST)
                .path("/supersearch-enrichment")
                .header("authorization", "Bearer secret-key")
                .header_exists("x-request-id")
                .header_exists("user-agent")
                .json_body(json!({"resource_id": "r1"}));
            then.status(200).json_body(json!({"id": "e1"}));
        });

        let cli = SupersearchRemote::new(server.base_url(), "secret-key");
        let out = cli
            .post("/supersearch-enrichment", &json!({"resource_id": "r1"}))
            .await
            .unwrap();
        m.assert();
        assert_eq!(out["id"], "e1");
    }

    #[tokio::test]
    async fn post_is_never_retried() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(POST).path("/supersearch-enrichment/run");
            then.status(500).body("err");
        });

        let cli = SupersearchRemote::new(server.base_url(), "k");
        let err = cli
            .post("/supersearch-enrichment/run", &json!({"resource_id": "r1"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Status { status: 500, .. }));
        assert_eq!(m.hits(), 1);
    }

    #[tokio::test]
    async fn get_is_retried_before_giving_up() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET).path("/supersearch-enrichment/r1");
            then.status(500).body("err");
        });

        let cli = SupersearchRemote::new(server.base_url(), "k");
        let err = cli
            .get("/supersearch-enrichment/r1", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Status { status: 500, .. }));
        // retries = 2 → one initial attempt plus two retries
        assert_eq!(m.hits(), 3);
    }

    #[tokio::test]
    async fn get_passes_query_params() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET)
                .path("/supersearch-enrichment/history/r1")
                .query_param("limit", "50")
                .query_param("starting_after", "cur");
            then.status(200).json_body(json!({"items": []}));
        });

        let cli = SupersearchRemote::new(server.base_url(), "k");
        let out = cli
            .get(
                "/supersearch-enrichment/history/r1",
                &[("limit", "50".to_string()), ("starting_after", "cur".to_string())],
            )
            .await
            .unwrap();
        m.assert();
        assert!(out["items"].is_array());
    }

    #[tokio::test]
    async fn client_error_surfaces_status_and_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/x");
            then.status(422).body("bad filters");
        });

        let cli = SupersearchRemote::new(server.base_url(), "k");
        let err = cli.post("/x", &json!({})).await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("422"));
        assert!(msg.contains("bad filters"));
    }
}
