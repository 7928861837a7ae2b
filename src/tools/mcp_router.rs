//! Unified rmcp tool router: every registered tool exposed over MCP.
//!
//! Each method is a thin delegation into the [`ToolRegistry`]; validation,
//! body building, and annotation all live in the tool implementations.

use std::future::Future;

use rmcp::handler::server::tool::{Parameters, ToolRouter};
use rmcp::model::JsonObject;
use serde_json::Value;

use crate::core::error::GatewayError;
use crate::infra::runtime::mcp_transport::ServerHandler;
use crate::tools::registry::{build_registry_from_env, ToolRegistry};
use crate::tools::{enrichment, supersearch};

#[derive(Clone)]
pub struct UnifiedSvc {
    registry: ToolRegistry,
}

impl ServerHandler for UnifiedSvc {}

impl UnifiedSvc {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    pub fn from_env() -> Self {
        Self::new(build_registry_from_env())
    }

    async fn dispatch(
        &self,
        name: &str,
        args: JsonObject,
    ) -> Result<rmcp::Json<Value>, rmcp::ErrorData> {
        let out = self
            .registry
            .call(name, &Value::Object(args))
            .await
            .map_err(|e| match e {
                GatewayError::InvalidParams(m) => rmcp::ErrorData::invalid_params(m, None),
                other => rmcp::ErrorData::internal_error(other.to_string(), None),
            })?;
        Ok(rmcp::Json(out))
    }
}

#[rmcp::tool_router]
impl UnifiedSvc {
    #[rmcp::tool(
        name = "supersearch.search_leads",
        description = "Search the SuperSearch lead database by ICP filters and import matches into a list or campaign (consumes credits)"
    )]
    async fn search_leads(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<rmcp::Json<Value>, rmcp::ErrorData> {
        self.dispatch(supersearch::SEARCH_LEADS, params.0).await
    }

    #[rmcp::tool(
        name = "supersearch.count_leads",
        description = "Count leads matching ICP filters without importing or spending credits"
    )]
    async fn count_leads(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<rmcp::Json<Value>, rmcp::ErrorData> {
        self.dispatch(supersearch::COUNT_LEADS, params.0).await
    }

    #[rmcp::tool(
        name = "supersearch.preview_leads",
        description = "Preview a sample of leads matching ICP filters without importing"
    )]
    async fn preview_leads(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<rmcp::Json<Value>, rmcp::ErrorData> {
        self.dispatch(supersearch::PREVIEW_LEADS, params.0).await
    }

    #[rmcp::tool(
        name = "supersearch.get_enrichment_status",
        description = "Check enrichment status for a list or campaign"
    )]
    async fn get_enrichment_status(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<rmcp::Json<Value>, rmcp::ErrorData> {
        self.dispatch(enrichment::GET_STATUS, params.0).await
    }

    #[rmcp::tool(
        name = "supersearch.create_enrichment",
        description = "Create enrichment for existing leads in a list or campaign"
    )]
    async fn create_enrichment(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<rmcp::Json<Value>, rmcp::ErrorData> {
        self.dispatch(enrichment::CREATE_ENRICHMENT, params.0).await
    }

    #[rmcp::tool(
        name = "supersearch.create_ai_enrichment",
        description = "Create AI-powered enrichment with a custom prompt and output column"
    )]
    async fn create_ai_enrichment(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<rmcp::Json<Value>, rmcp::ErrorData> {
        self.dispatch(enrichment::CREATE_AI_ENRICHMENT, params.0).await
    }

    #[rmcp::tool(
        name = "supersearch.run_enrichment",
        description = "Manually trigger enrichment on specific leads or all unenriched leads"
    )]
    async fn run_enrichment(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<rmcp::Json<Value>, rmcp::ErrorData> {
        self.dispatch(enrichment::RUN_ENRICHMENT, params.0).await
    }

    #[rmcp::tool(
        name = "supersearch.get_enrichment_history",
        description = "Get paginated enrichment run history for a list or campaign"
    )]
    async fn get_enrichment_history(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<rmcp::Json<Value>, rmcp::ErrorData> {
        self.dispatch(enrichment::GET_HISTORY, params.0).await
    }

    #[rmcp::tool(
        name = "supersearch.update_enrichment_settings",
        description = "Update enrichment settings for a list or campaign"
    )]
    async fn update_enrichment_settings(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<rmcp::Json<Value>, rmcp::ErrorData> {
        self.dispatch(enrichment::UPDATE_SETTINGS, params.0).await
    }
}

pub type UnifiedRouter = ToolRouter<UnifiedSvc>;

impl UnifiedSvc {
    pub fn router() -> UnifiedRouter {
        // Wrapper to expose the macro-generated private tool_router
        Self::tool_router()
    }
}

/// Factory shape required by the rmcp stdio and streamable HTTP transports.
pub fn factory_from_env() -> (UnifiedSvc, UnifiedRouter) {
    (UnifiedSvc::from_env(), UnifiedSvc::tool_router())
}
