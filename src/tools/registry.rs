use std::collections::HashMap;
use std::sync::Arc;

use crate::clients::supersearch::SupersearchRemote;
use crate::core::error::GatewayError;
use crate::core::tool::Tool;
use crate::infra::config::ApiConfig;
use crate::tools::enrichment::{
    CreateAiEnrichmentTool, CreateEnrichmentTool, GetHistoryTool, GetStatusTool,
    RunEnrichmentTool, UpdateSettingsTool,
};
use crate::tools::supersearch::{CountLeadsTool, PreviewLeadsTool, SearchLeadsTool};

#[derive(Clone, Default)]
pub struct ToolRegistry {
    by_name: Arc<HashMap<&'static str, Arc<dyn Tool>>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tools(tools: impl IntoIterator<Item = Arc<dyn Tool>>) -> Self {
        let mut map: HashMap<&'static str, Arc<dyn Tool>> = HashMap::new();
        for t in tools {
            map.insert(t.name(), t);
        }
        Self { by_name: Arc::new(map) }
    }

    pub fn list(&self) -> Vec<ToolMeta> {
        let mut metas: Vec<ToolMeta> = self
            .by_name
            .values()
            .map(|t| ToolMeta {
                name: t.name(),
                category: t.category(),
                description: t.description(),
                input_schema: t.input_schema(),
            })
            .collect();
        metas.sort_by_key(|m| m.name);
        metas
    }

    pub async fn call(
        &self,
        name: &str,
        args: &serde_json::Value,
    ) -> Result<serde_json::Value, GatewayError> {
        let t = self
            .by_name
            .get(name)
            .ok_or_else(|| GatewayError::invalid(format!("unknown tool: {name}")))?;
        t.call(args).await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolMeta {
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub input_schema: serde_json::Value,
}

/// All nine SuperSearch tools over one shared client.
pub fn build_registry_with(client: SupersearchRemote) -> ToolRegistry {
    ToolRegistry::with_tools([
        Arc::new(SearchLeadsTool::new(client.clone())) as Arc<dyn Tool>,
        Arc::new(CountLeadsTool::new(client.clone())),
        Arc::new(PreviewLeadsTool::new(client.clone())),
        Arc::new(GetStatusTool::new(client.clone())),
        Arc::new(CreateEnrichmentTool::new(client.clone())),
        Arc::new(CreateAiEnrichmentTool::new(client.clone())),
        Arc::new(RunEnrichmentTool::new(client.clone())),
        Arc::new(GetHistoryTool::new(client.clone())),
        Arc::new(UpdateSettingsTool::new(client)),
    ])
}

pub fn build_registry_from_env() -> ToolRegistry {
    let cfg = ApiConfig::from_env_and_toml();
    build_registry_with(SupersearchRemote::from_config(&cfg))
}
