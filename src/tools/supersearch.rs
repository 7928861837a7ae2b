//! SuperSearch lead discovery adapters: search-and-import, count, preview.
//!
//! These three share the normalized `search_filters` body. Count and
//! preview send filters only; search additionally carries the resource
//! target, enrichment flags, and the import limit. All three degrade a
//! transport fault into `{"error", "debug_payload"}` so a caller can see
//! the exact outbound body the API rejected.

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use crate::clients::supersearch::SupersearchRemote;
use crate::core::error::GatewayError;
use crate::core::tool::{Tool, ToolSpec};
use crate::domain::enrichment::{resource_target, EnrichmentType};
use crate::domain::filters::SearchFilters;
use crate::domain::inputs::{FiltersOnlyInput, SearchLeadsInput};

use super::parse_args;

pub const SEARCH_LEADS: &str = "supersearch.search_leads";
pub const COUNT_LEADS: &str = "supersearch.count_leads";
pub const PREVIEW_LEADS: &str = "supersearch.preview_leads";

const SEARCH_PATH: &str = "/supersearch-enrichment/enrich-leads-from-supersearch";
const COUNT_PATH: &str = "/supersearch-enrichment/count-leads-from-supersearch";
const PREVIEW_PATH: &str = "/supersearch-enrichment/preview-leads-from-supersearch";

fn filters_only_body(filters: &SearchFilters) -> Value {
    json!({ "search_filters": filters.normalize() })
}

/// Diagnostic payload returned instead of propagating a transport fault:
/// the outbound body is what to inspect when the API rejects a filter shape.
fn debug_envelope(err: impl std::fmt::Display, body: &Value) -> Value {
    json!({ "error": err.to_string(), "debug_payload": body })
}

fn search_filters_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "locations": { "type": "object" },
            "title": { "type": "object" },
            "department": { "type": "array", "items": { "type": "string" } },
            "level": { "type": "array", "items": { "type": "string" } },
            "company_name": { "type": "object" },
            "industry": { "type": "object" },
            "employee_count": { "type": "array", "items": { "type": "string" } },
            "revenue": { "type": "array", "items": { "type": "string" } },
            "domains": { "type": "array", "items": { "type": "string" } },
            "look_alike": { "type": "string" },
            "keyword_filter": { "type": "object" },
            "funding_type": { "type": "array", "items": { "type": "string" } },
            "news": { "type": "array", "items": { "type": "string" } },
            "skip_owned_leads": { "type": "boolean" },
            "show_one_lead_per_company": { "type": "boolean" }
        }
    })
}

/// Search the lead database by ICP filters and import matches.
#[derive(Clone)]
pub struct SearchLeadsTool {
    client: SupersearchRemote,
}

impl SearchLeadsTool {
    pub fn new(client: SupersearchRemote) -> Self {
        Self { client }
    }
}

impl ToolSpec for SearchLeadsTool {
    fn name(&self) -> &'static str {
        SEARCH_LEADS
    }
    fn description(&self) -> &'static str {
        "Search the SuperSearch lead database by ICP filters and import matching leads \
         into a list or campaign, enriching them on the way in (consumes credits; \
         use 'limit' to control spend)"
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "list_id": { "type": "string", "description": "Import into this list (or campaign_id)" },
                "campaign_id": { "type": "string", "description": "Import into this campaign (or list_id)" },
                "search_filters": search_filters_schema(),
                "enrichment_types": { "type": "array", "items": { "type": "string" } },
                "limit": { "type": "integer", "minimum": 1, "maximum": 10000 },
                "search_name": { "type": "string" },
                "list_name": { "type": "string" }
            },
            "required": ["search_filters"]
        })
    }
}

#[async_trait]
impl Tool for SearchLeadsTool {
    async fn call(&self, arguments: &Value) -> Result<Value, GatewayError> {
        let input: SearchLeadsInput = parse_args(arguments)?;
        if !(1..=10_000).contains(&input.limit) {
            return Err(GatewayError::invalid("limit must be within 1..=10000"));
        }

        let mut body = Map::new();
        body.insert(
            "search_filters".into(),
            Value::Object(input.search_filters.normalize()),
        );
        if let Some((id, kind)) =
            resource_target(input.list_id.as_deref(), input.campaign_id.as_deref())
        {
            body.insert("resource_id".into(), Value::String(id));
            body.insert("resource_type".into(), json!(kind));
        }
        // The API expects one top-level boolean flag per enrichment kind.
        match input.enrichment_types.as_deref() {
            Some(types) if !types.is_empty() => {
                for t in types {
                    body.insert(t.wire_name().into(), Value::Bool(true));
                }
            }
            _ => {
                body.insert(
                    EnrichmentType::WorkEmailEnrichment.wire_name().into(),
                    Value::Bool(true),
                );
            }
        }
        body.insert("limit".into(), json!(input.limit));
        if let Some(name) = &input.search_name {
            body.insert("search_name".into(), json!(name));
        }
        if let Some(name) = &input.list_name {
            body.insert("list_name".into(), json!(name));
        }
        let body = Value::Object(body);

        let resp = match self.client.post(SEARCH_PATH, &body).await {
            Ok(v) => v,
            Err(e) => return Ok(debug_envelope(e, &body)),
        };

        let resource_id = ["resource_id", "list_id", "campaign_id"]
            .iter()
            .find_map(|k| resp.get(*k).and_then(|v| v.as_str()).map(str::to_owned))
            .or(input.campaign_id)
            .or(input.list_id);

        let mut out = Map::new();
        out.insert("response".into(), resp);
        if let Some(id) = resource_id {
            out.insert(
                "next_steps".into(),
                json!(format!(
                    "Enrichment started. Call supersearch.get_enrichment_status with \
                     resource_id='{id}' to check progress, then list the leads once it completes."
                )),
            );
        }
        Ok(Value::Object(out))
    }
}

/// Count leads matching the filters without importing anything.
#[derive(Clone)]
pub struct CountLeadsTool {
    client: SupersearchRemote,
}

impl CountLeadsTool {
    pub fn new(client: SupersearchRemote) -> Self {
        Self { client }
    }
}

impl ToolSpec for CountLeadsTool {
    fn name(&self) -> &'static str {
        COUNT_LEADS
    }
    fn description(&self) -> &'static str {
        "Count leads matching ICP filters without importing or spending credits"
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": { "search_filters": search_filters_schema() },
            "required": ["search_filters"]
        })
    }
}

#[async_trait]
impl Tool for CountLeadsTool {
    async fn call(&self, arguments: &Value) -> Result<Value, GatewayError> {
        let input: FiltersOnlyInput = parse_args(arguments)?;
        let body = filters_only_body(&input.search_filters);
        match self.client.post(COUNT_PATH, &body).await {
            Ok(resp) => Ok(json!({
                "response": resp,
                "next_steps": "Call supersearch.search_leads with the same filters to import these leads.",
            })),
            Err(e) => Ok(debug_envelope(e, &body)),
        }
    }
}

/// Preview a sample of matching leads without importing anything.
#[derive(Clone)]
pub struct PreviewLeadsTool {
    client: SupersearchRemote,
}

impl PreviewLeadsTool {
    pub fn new(client: SupersearchRemote) -> Self {
        Self { client }
    }
}

impl ToolSpec for PreviewLeadsTool {
    fn name(&self) -> &'static str {
        PREVIEW_LEADS
    }
    fn description(&self) -> &'static str {
        "Preview a sample of leads matching ICP filters without importing or spending credits"
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": { "search_filters": search_filters_schema() },
            "required": ["search_filters"]
        })
    }
}

#[async_trait]
impl Tool for PreviewLeadsTool {
    async fn call(&self, arguments: &Value) -> Result<Value, GatewayError> {
        let input: FiltersOnlyInput = parse_args(arguments)?;
        let body = filters_only_body(&input.search_filters);
        match self.client.post(PREVIEW_PATH, &body).await {
            Ok(resp) => Ok(json!({
                "response": resp,
                "next_steps": "Adjust the filters and preview again, or import with supersearch.search_leads.",
            })),
            Err(e) => Ok(debug_envelope(e, &body)),
        }
    }
}
