//! Enrichment lifecycle adapters: status, create, AI create, manual run,
//! history, settings update.
//!
//! Unlike the discovery adapters, transport faults here propagate to the
//! caller unmodified — there is no filter body worth echoing back.

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use crate::clients::supersearch::SupersearchRemote;
use crate::core::error::GatewayError;
use crate::core::tool::{Tool, ToolSpec};
use crate::domain::inputs::{
    CreateAiEnrichmentInput, CreateEnrichmentInput, HistoryInput, RunEnrichmentInput, StatusInput,
    UpdateSettingsInput,
};

use super::{parse_args, require_resource_id};

pub const GET_STATUS: &str = "supersearch.get_enrichment_status";
pub const CREATE_ENRICHMENT: &str = "supersearch.create_enrichment";
pub const CREATE_AI_ENRICHMENT: &str = "supersearch.create_ai_enrichment";
pub const RUN_ENRICHMENT: &str = "supersearch.run_enrichment";
pub const GET_HISTORY: &str = "supersearch.get_enrichment_history";
pub const UPDATE_SETTINGS: &str = "supersearch.update_enrichment_settings";

const CREATE_PATH: &str = "/supersearch-enrichment";
const AI_PATH: &str = "/supersearch-enrichment/ai";
const RUN_PATH: &str = "/supersearch-enrichment/run";

fn status_hint(resource_id: &str) -> Value {
    json!(format!(
        "Call supersearch.get_enrichment_status with resource_id='{resource_id}' to check progress."
    ))
}

fn annotated(resp: Value, next_steps: Value) -> Value {
    json!({ "response": resp, "next_steps": next_steps })
}

/// Check enrichment configuration and progress for a list or campaign.
#[derive(Clone)]
pub struct GetStatusTool {
    client: SupersearchRemote,
}

impl GetStatusTool {
    pub fn new(client: SupersearchRemote) -> Self {
        Self { client }
    }
}

impl ToolSpec for GetStatusTool {
    fn name(&self) -> &'static str {
        GET_STATUS
    }
    fn description(&self) -> &'static str {
        "Check enrichment status for a list or campaign: configuration, progress, credit usage"
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": { "resource_id": { "type": "string" } },
            "required": ["resource_id"]
        })
    }
}

#[async_trait]
impl Tool for GetStatusTool {
    async fn call(&self, arguments: &Value) -> Result<Value, GatewayError> {
        let input: StatusInput = parse_args(arguments)?;
        require_resource_id(&input.resource_id)?;
        let resp = self
            .client
            .get(&format!("/supersearch-enrichment/{}", input.resource_id), &[])
            .await?;
        Ok(resp)
    }
}

/// Create enrichment for leads already sitting in a list or campaign.
#[derive(Clone)]
pub struct CreateEnrichmentTool {
    client: SupersearchRemote,
}

impl CreateEnrichmentTool {
    pub fn new(client: SupersearchRemote) -> Self {
        Self { client }
    }
}

impl ToolSpec for CreateEnrichmentTool {
    fn name(&self) -> &'static str {
        CREATE_ENRICHMENT
    }
    fn description(&self) -> &'static str {
        "Create enrichment for existing leads in a list or campaign (consumes credits)"
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "resource_id": { "type": "string" },
                "enrichment_type": { "type": "string" },
                "auto_update": { "type": "boolean" },
                "is_evergreen": { "type": "boolean" },
                "skip_already_enriched": { "type": "boolean" }
            },
            "required": ["resource_id"]
        })
    }
}

#[async_trait]
impl Tool for CreateEnrichmentTool {
    async fn call(&self, arguments: &Value) -> Result<Value, GatewayError> {
        let input: CreateEnrichmentInput = parse_args(arguments)?;
        require_resource_id(&input.resource_id)?;

        let mut body = Map::new();
        body.insert("resource_id".into(), json!(input.resource_id));
        body.insert("enrichment_type".into(), json!(input.enrichment_type));
        if let Some(v) = input.auto_update {
            body.insert("auto_update".into(), json!(v));
        }
        if let Some(v) = input.is_evergreen {
            body.insert("is_evergreen".into(), json!(v));
        }
        if let Some(v) = input.skip_already_enriched {
            body.insert("skip_already_enriched".into(), json!(v));
        }

        let resp = self.client.post(CREATE_PATH, &Value::Object(body)).await?;
        Ok(annotated(resp, status_hint(&input.resource_id)))
    }
}

/// Run a custom prompt through an LLM for each lead, storing the output in
/// a new column.
#[derive(Clone)]
pub struct CreateAiEnrichmentTool {
    client: SupersearchRemote,
}

impl CreateAiEnrichmentTool {
    pub fn new(client: SupersearchRemote) -> Self {
        Self { client }
    }
}

impl ToolSpec for CreateAiEnrichmentTool {
    fn name(&self) -> &'static str {
        CREATE_AI_ENRICHMENT
    }
    fn description(&self) -> &'static str {
        "Create AI-powered enrichment: run a prompt (with {{column}} placeholders) per lead \
         and store results in a new column"
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "resource_id": { "type": "string" },
                "prompt": { "type": "string" },
                "output_column": { "type": "string" },
                "model": { "type": "string" },
                "input_columns": { "type": "array", "items": { "type": "string" } },
                "overwrite": { "type": "boolean" },
                "auto_update": { "type": "boolean" },
                "limit": { "type": "integer", "minimum": 1 }
            },
            "required": ["resource_id", "prompt", "output_column"]
        })
    }
}

#[async_trait]
impl Tool for CreateAiEnrichmentTool {
    async fn call(&self, arguments: &Value) -> Result<Value, GatewayError> {
        let input: CreateAiEnrichmentInput = parse_args(arguments)?;
        require_resource_id(&input.resource_id)?;
        if input.prompt.trim().is_empty() {
            return Err(GatewayError::invalid("prompt must be non-empty"));
        }
        if input.output_column.trim().is_empty() {
            return Err(GatewayError::invalid("output_column must be non-empty"));
        }

        let mut body = Map::new();
        body.insert("resource_id".into(), json!(input.resource_id));
        body.insert("prompt".into(), json!(input.prompt));
        body.insert("output_column".into(), json!(input.output_column));
        body.insert("model".into(), json!(input.model));
        if let Some(cols) = &input.input_columns {
            body.insert("input_columns".into(), json!(cols));
        }
        if let Some(v) = input.overwrite {
            body.insert("overwrite".into(), json!(v));
        }
        if let Some(v) = input.auto_update {
            body.insert("auto_update".into(), json!(v));
        }
        if let Some(v) = input.limit {
            body.insert("limit".into(), json!(v));
        }

        let resp = self.client.post(AI_PATH, &Value::Object(body)).await?;
        let hint = json!(format!(
            "AI enrichment started. Call supersearch.get_enrichment_status with \
             resource_id='{}' to check progress; results will appear in the '{}' column.",
            input.resource_id, input.output_column
        ));
        Ok(annotated(resp, hint))
    }
}

/// Manually trigger enrichment on specific leads or all leads in a resource.
#[derive(Clone)]
pub struct RunEnrichmentTool {
    client: SupersearchRemote,
}

impl RunEnrichmentTool {
    pub fn new(client: SupersearchRemote) -> Self {
        Self { client }
    }
}

impl ToolSpec for RunEnrichmentTool {
    fn name(&self) -> &'static str {
        RUN_ENRICHMENT
    }
    fn description(&self) -> &'static str {
        "Manually trigger enrichment on specific leads, or on all unenriched leads when \
         lead_ids is omitted"
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "resource_id": { "type": "string" },
                "lead_ids": { "type": "array", "items": { "type": "string" } },
                "enrichment_type": { "type": "string" }
            },
            "required": ["resource_id"]
        })
    }
}

#[async_trait]
impl Tool for RunEnrichmentTool {
    async fn call(&self, arguments: &Value) -> Result<Value, GatewayError> {
        let input: RunEnrichmentInput = parse_args(arguments)?;
        require_resource_id(&input.resource_id)?;

        let mut body = Map::new();
        body.insert("resource_id".into(), json!(input.resource_id));
        if let Some(ids) = &input.lead_ids {
            body.insert("lead_ids".into(), json!(ids));
        }
        if let Some(t) = input.enrichment_type {
            body.insert("enrichment_type".into(), json!(t));
        }

        let resp = self.client.post(RUN_PATH, &Value::Object(body)).await?;
        Ok(annotated(resp, status_hint(&input.resource_id)))
    }
}

/// Fetch past enrichment runs for auditing and debugging.
#[derive(Clone)]
pub struct GetHistoryTool {
    client: SupersearchRemote,
}

impl GetHistoryTool {
    pub fn new(client: SupersearchRemote) -> Self {
        Self { client }
    }
}

impl ToolSpec for GetHistoryTool {
    fn name(&self) -> &'static str {
        GET_HISTORY
    }
    fn description(&self) -> &'static str {
        "Get enrichment run history for a list or campaign (paginated via starting_after)"
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "resource_id": { "type": "string" },
                "limit": { "type": "integer", "minimum": 1, "maximum": 100 },
                "starting_after": { "type": "string" }
            },
            "required": ["resource_id"]
        })
    }
}

#[async_trait]
impl Tool for GetHistoryTool {
    async fn call(&self, arguments: &Value) -> Result<Value, GatewayError> {
        let input: HistoryInput = parse_args(arguments)?;
        require_resource_id(&input.resource_id)?;
        if !(1..=100).contains(&input.limit) {
            return Err(GatewayError::invalid("limit must be within 1..=100"));
        }

        let mut query = vec![("limit", input.limit.to_string())];
        if let Some(cursor) = &input.starting_after {
            query.push(("starting_after", cursor.clone()));
        }

        let resp = self
            .client
            .get(
                &format!("/supersearch-enrichment/history/{}", input.resource_id),
                &query,
            )
            .await?;

        let next_cursor = resp
            .pointer("/pagination/next_starting_after")
            .and_then(|v| v.as_str())
            .map(str::to_owned);

        let mut out = Map::new();
        out.insert("response".into(), resp);
        if let Some(cursor) = next_cursor {
            out.insert(
                "pagination_hint".into(),
                json!(format!(
                    "More results available. Call supersearch.get_enrichment_history with \
                     starting_after='{cursor}' for the next page."
                )),
            );
        }
        Ok(Value::Object(out))
    }
}

/// Update enrichment settings on an existing resource.
#[derive(Clone)]
pub struct UpdateSettingsTool {
    client: SupersearchRemote,
}

impl UpdateSettingsTool {
    pub fn new(client: SupersearchRemote) -> Self {
        Self { client }
    }
}

impl ToolSpec for UpdateSettingsTool {
    fn name(&self) -> &'static str {
        UPDATE_SETTINGS
    }
    fn description(&self) -> &'static str {
        "Update enrichment settings (auto_update, is_evergreen, skip_already_enriched) for a \
         list or campaign"
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "resource_id": { "type": "string" },
                "auto_update": { "type": "boolean" },
                "is_evergreen": { "type": "boolean" },
                "skip_already_enriched": { "type": "boolean" }
            },
            "required": ["resource_id"]
        })
    }
}

#[async_trait]
impl Tool for UpdateSettingsTool {
    async fn call(&self, arguments: &Value) -> Result<Value, GatewayError> {
        let input: UpdateSettingsInput = parse_args(arguments)?;
        require_resource_id(&input.resource_id)?;
        if input.is_noop() {
            // User error, not a fault: report it without touching the wire.
            return Ok(json!({
                "error": "no settings provided",
                "hint": "set at least one of auto_update, is_evergreen, skip_already_enriched",
            }));
        }

        let mut body = Map::new();
        if let Some(v) = input.auto_update {
            body.insert("auto_update".into(), json!(v));
        }
        if let Some(v) = input.is_evergreen {
            body.insert("is_evergreen".into(), json!(v));
        }
        if let Some(v) = input.skip_already_enriched {
            body.insert("skip_already_enriched".into(), json!(v));
        }

        let resp = self
            .client
            .patch(
                &format!("/supersearch-enrichment/{}/settings", input.resource_id),
                &Value::Object(body),
            )
            .await?;
        Ok(json!({ "response": resp }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn status_returns_the_remote_mapping_unchanged() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET).path("/supersearch-enrichment/r1");
            then.status(200)
                .json_body(json!({"status": "running", "leads_enriched": 42}));
        });

        let tool = GetStatusTool::new(SupersearchRemote::new(server.base_url(), "k"));
        let out = tool.call(&json!({"resource_id": "r1"})).await.unwrap();
        m.assert();
        assert_eq!(out, json!({"status": "running", "leads_enriched": 42}));
    }

    #[tokio::test]
    async fn status_propagates_transport_faults() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/supersearch-enrichment/r1");
            then.status(502).body("bad gateway");
        });

        let tool = GetStatusTool::new(SupersearchRemote::new(server.base_url(), "k"));
        let err = tool.call(&json!({"resource_id": "r1"})).await.unwrap_err();
        assert!(matches!(err, GatewayError::Upstream(_)));
        assert!(err.to_string().contains("502"));
    }

    #[tokio::test]
    async fn status_rejects_blank_resource_id_locally() {
        let tool = GetStatusTool::new(SupersearchRemote::new("http://127.0.0.1:1", "k"));
        let err = tool.call(&json!({"resource_id": "  "})).await.unwrap_err();
        assert!(matches!(err, GatewayError::InvalidParams(_)));
    }

    #[tokio::test]
    async fn create_sends_defaults_and_only_set_flags() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(POST).path("/supersearch-enrichment").json_body(json!({
                "resource_id": "r1",
                "enrichment_type": "work_email_enrichment",
                "skip_already_enriched": true
            }));
            then.status(200).json_body(json!({"id": "e1"}));
        });

        let tool = CreateEnrichmentTool::new(SupersearchRemote::new(server.base_url(), "k"));
        let out = tool.call(&json!({"resource_id": "r1"})).await.unwrap();
        m.assert();
        assert_eq!(out["response"]["id"], "e1");
        assert!(out["next_steps"].as_str().unwrap().contains("r1"));
    }

    #[tokio::test]
    async fn ai_enrichment_builds_full_body_and_mentions_output_column() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(POST).path("/supersearch-enrichment/ai").json_body(json!({
                "resource_id": "r1",
                "prompt": "Summarize {{company_name}} in 2 sentences",
                "output_column": "summary",
                "model": "gpt-4o-mini",
                "input_columns": ["company_name"],
                "overwrite": true
            }));
            then.status(200).json_body(json!({"id": "ai1"}));
        });

        let tool = CreateAiEnrichmentTool::new(SupersearchRemote::new(server.base_url(), "k"));
        let out = tool
            .call(&json!({
                "resource_id": "r1",
                "prompt": "Summarize {{company_name}} in 2 sentences",
                "output_column": "summary",
                "input_columns": ["company_name"],
                "overwrite": true
            }))
            .await
            .unwrap();
        m.assert();
        assert!(out["next_steps"].as_str().unwrap().contains("'summary'"));
    }

    #[tokio::test]
    async fn ai_enrichment_rejects_blank_prompt() {
        let tool = CreateAiEnrichmentTool::new(SupersearchRemote::new("http://127.0.0.1:1", "k"));
        let err = tool
            .call(&json!({"resource_id": "r1", "prompt": " ", "output_column": "c"}))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::InvalidParams(_)));
    }

    #[tokio::test]
    async fn run_forwards_lead_ids_when_given() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(POST).path("/supersearch-enrichment/run").json_body(json!({
                "resource_id": "r1",
                "lead_ids": ["l1", "l2"]
            }));
            then.status(200).json_body(json!({"triggered": 2}));
        });

        let tool = RunEnrichmentTool::new(SupersearchRemote::new(server.base_url(), "k"));
        let out = tool
            .call(&json!({"resource_id": "r1", "lead_ids": ["l1", "l2"]}))
            .await
            .unwrap();
        m.assert();
        assert_eq!(out["response"]["triggered"], 2);
    }

    #[tokio::test]
    async fn history_paginates_and_hints_on_next_cursor() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET)
                .path("/supersearch-enrichment/history/r1")
                .query_param("limit", "50");
            then.status(200).json_body(json!({
                "items": [{"run": 1}],
                "pagination": {"next_starting_after": "cur-2"}
            }));
        });

        let tool = GetHistoryTool::new(SupersearchRemote::new(server.base_url(), "k"));
        let out = tool.call(&json!({"resource_id": "r1"})).await.unwrap();
        m.assert();
        assert_eq!(out["response"]["items"][0]["run"], 1);
        assert!(out["pagination_hint"].as_str().unwrap().contains("cur-2"));

        // No cursor, no hint.
        let server2 = MockServer::start();
        server2.mock(|when, then| {
            when.method(GET).path("/supersearch-enrichment/history/r2");
            then.status(200).json_body(json!({"items": []}));
        });
        let tool2 = GetHistoryTool::new(SupersearchRemote::new(server2.base_url(), "k"));
        let out2 = tool2.call(&json!({"resource_id": "r2"})).await.unwrap();
        assert!(out2.get("pagination_hint").is_none());
    }

    #[tokio::test]
    async fn history_rejects_limit_above_100() {
        let tool = GetHistoryTool::new(SupersearchRemote::new("http://127.0.0.1:1", "k"));
        let err = tool
            .call(&json!({"resource_id": "r1", "limit": 101}))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::InvalidParams(_)));
    }

    #[tokio::test]
    async fn settings_noop_returns_hint_without_network_call() {
        // Unroutable base: any network attempt would fail the test.
        let tool = UpdateSettingsTool::new(SupersearchRemote::new("http://127.0.0.1:1", "k"));
        let out = tool.call(&json!({"resource_id": "r1"})).await.unwrap();
        assert_eq!(out["error"], "no settings provided");
        assert!(out["hint"].as_str().unwrap().contains("auto_update"));
    }

    #[tokio::test]
    async fn settings_patches_only_set_fields() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(httpmock::Method::PATCH)
                .path("/supersearch-enrichment/r1/settings")
                .json_body(json!({"auto_update": true}));
            then.status(200).json_body(json!({"updated": true}));
        });

        let tool = UpdateSettingsTool::new(SupersearchRemote::new(server.base_url(), "k"));
        let out = tool
            .call(&json!({"resource_id": "r1", "auto_update": true}))
            .await
            .unwrap();
        m.assert();
        assert_eq!(out["response"]["updated"], true);
    }
}
