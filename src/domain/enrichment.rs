//! Enrichment vocabulary: kind and model enumerations, resource targeting.

use serde::{Deserialize, Serialize};

/// Enrichment kinds the remote API understands. The wire names double as
/// the top-level boolean flag names on the search-and-import body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrichmentType {
    #[default]
    WorkEmailEnrichment,
    FullyEnrichedProfile,
    EmailVerification,
    Joblisting,
    Technologies,
    News,
    Funding,
    AiEnrichment,
    CustomFlow,
}

impl EnrichmentType {
    pub fn wire_name(self) -> &'static str {
        match self {
            EnrichmentType::WorkEmailEnrichment => "work_email_enrichment",
            EnrichmentType::FullyEnrichedProfile => "fully_enriched_profile",
            EnrichmentType::EmailVerification => "email_verification",
            EnrichmentType::Joblisting => "joblisting",
            EnrichmentType::Technologies => "technologies",
            EnrichmentType::News => "news",
            EnrichmentType::Funding => "funding",
            EnrichmentType::AiEnrichment => "ai_enrichment",
            EnrichmentType::CustomFlow => "custom_flow",
        }
    }
}

/// Models available for AI enrichment prompts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiModel {
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
    #[serde(rename = "gpt-4")]
    Gpt4,
    #[serde(rename = "gpt-4o")]
    Gpt4o,
    #[default]
    #[serde(rename = "gpt-4o-mini")]
    Gpt4oMini,
    #[serde(rename = "gpt-4.1")]
    Gpt41,
    #[serde(rename = "claude-3-5-sonnet")]
    Claude35Sonnet,
    #[serde(rename = "claude-3-opus")]
    Claude3Opus,
    #[serde(rename = "claude-3-haiku")]
    Claude3Haiku,
    #[serde(rename = "gemini-1.5-pro")]
    Gemini15Pro,
    #[serde(rename = "gemini-1.5-flash")]
    Gemini15Flash,
    #[serde(rename = "grok-2")]
    Grok2,
    #[serde(rename = "perplexity-sonar")]
    PerplexitySonar,
    #[serde(rename = "instantly-ai-agent")]
    InstantlyAiAgent,
}

/// Container kinds leads can be imported into. The remote API identifies
/// them by a numeric tag on the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Campaign,
    List,
}

impl ResourceKind {
    pub fn tag(self) -> u8 {
        match self {
            ResourceKind::Campaign => 1,
            ResourceKind::List => 2,
        }
    }
}

/// Pick the `{resource_id, resource_type}` pair for a request body.
/// Blank or whitespace-only ids count as absent.
///
/// list_id is assigned first, campaign_id second, so campaign wins when both
/// are set. That assignment order is contractual until the remote API says
/// otherwise; a regression test pins it.
pub fn resource_target(
    list_id: Option<&str>,
    campaign_id: Option<&str>,
) -> Option<(String, u8)> {
    let mut target = None;
    if let Some(id) = list_id.map(str::trim).filter(|s| !s.is_empty()) {
        target = Some((id.to_owned(), ResourceKind::List.tag()));
    }
    if let Some(id) = campaign_id.map(str::trim).filter(|s| !s.is_empty()) {
        target = Some((id.to_owned(), ResourceKind::Campaign.tag()));
    }
    target
}
