//! Tool input payloads, deserialized straight from MCP tool arguments.
//! Unknown fields are ignored; defaults mirror the remote API's.

use serde::Deserialize;

use super::enrichment::{AiModel, EnrichmentType};
use super::filters::SearchFilters;

fn default_search_limit() -> u32 {
    100
}

fn default_history_limit() -> u32 {
    50
}

fn default_skip_already_enriched() -> Option<bool> {
    Some(true)
}

/// Input for search-and-import. `limit` bounds credit spend.
#[derive(Debug, Deserialize)]
pub struct SearchLeadsInput {
    #[serde(default)]
    pub list_id: Option<String>,
    #[serde(default)]
    pub campaign_id: Option<String>,
    pub search_filters: SearchFilters,
    #[serde(default)]
    pub enrichment_types: Option<Vec<EnrichmentType>>,
    #[serde(default = "default_search_limit")]
    pub limit: u32,
    #[serde(default)]
    pub search_name: Option<String>,
    #[serde(default)]
    pub list_name: Option<String>,
}

/// Input for count and preview: filters only, nothing else goes on the wire.
#[derive(Debug, Deserialize)]
pub struct FiltersOnlyInput {
    pub search_filters: SearchFilters,
}

#[derive(Debug, Deserialize)]
pub struct StatusInput {
    pub resource_id: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateEnrichmentInput {
    pub resource_id: String,
    #[serde(default)]
    pub enrichment_type: EnrichmentType,
    #[serde(default)]
    pub auto_update: Option<bool>,
    #[serde(default)]
    pub is_evergreen: Option<bool>,
    #[serde(default = "default_skip_already_enriched")]
    pub skip_already_enriched: Option<bool>,
}

/// Input for AI enrichment. `prompt` may reference lead columns with
/// `{{column_name}}` placeholders; the remote system resolves them.
#[derive(Debug, Deserialize)]
pub struct CreateAiEnrichmentInput {
    pub resource_id: String,
    pub prompt: String,
    pub output_column: String,
    #[serde(default)]
    pub model: AiModel,
    #[serde(default)]
    pub input_columns: Option<Vec<String>>,
    #[serde(default)]
    pub overwrite: Option<bool>,
    #[serde(default)]
    pub auto_update: Option<bool>,
    #[serde(default)]
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct RunEnrichmentInput {
    pub resource_id: String,
    #[serde(default)]
    pub lead_ids: Option<Vec<String>>,
    #[serde(default)]
    pub enrichment_type: Option<EnrichmentType>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryInput {
    pub resource_id: String,
    #[serde(default = "default_history_limit")]
    pub limit: u32,
    #[serde(default)]
    pub starting_after: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSettingsInput {
    pub resource_id: String,
    #[serde(default)]
    pub auto_update: Option<bool>,
    #[serde(default)]
    pub is_evergreen: Option<bool>,
    #[serde(default)]
    pub skip_already_enriched: Option<bool>,
}

impl UpdateSettingsInput {
    /// True when the call would change nothing and must not hit the wire.
    pub fn is_noop(&self) -> bool {
        self.auto_update.is_none()
            && self.is_evergreen.is_none()
            && self.skip_already_enriched.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_input_defaults_limit_to_100() {
        let input: SearchLeadsInput =
            serde_json::from_value(json!({"search_filters": {}})).unwrap();
        assert_eq!(input.limit, 100);
        assert!(input.enrichment_types.is_none());
    }

    #[test]
    fn create_enrichment_defaults() {
        let input: CreateEnrichmentInput =
            serde_json::from_value(json!({"resource_id": "r1"})).unwrap();
        assert_eq!(input.enrichment_type, EnrichmentType::WorkEmailEnrichment);
        assert_eq!(input.skip_already_enriched, Some(true));
        assert!(input.auto_update.is_none());
    }

    #[test]
    fn history_input_defaults_limit_to_50() {
        let input: HistoryInput =
            serde_json::from_value(json!({"resource_id": "r1"})).unwrap();
        assert_eq!(input.limit, 50);
        assert!(input.starting_after.is_none());
    }

    #[test]
    fn settings_input_noop_detection() {
        let noop: UpdateSettingsInput =
            serde_json::from_value(json!({"resource_id": "r1"})).unwrap();
        assert!(noop.is_noop());
        let set: UpdateSettingsInput =
            serde_json::from_value(json!({"resource_id": "r1", "auto_update": false})).unwrap();
        assert!(!set.is_noop());
    }

    #[test]
    fn missing_required_fields_fail_deserialization() {
        assert!(serde_json::from_value::<SearchLeadsInput>(json!({})).is_err());
        assert!(serde_json::from_value::<CreateAiEnrichmentInput>(
            json!({"resource_id": "r1", "prompt": "p"})
        )
        .is_err());
    }
}
