//! Domain model: ICP filters, enrichment vocabulary, tool inputs.

pub mod enrichment;
pub mod filters;
pub mod inputs;

pub use enrichment::{resource_target, AiModel, EnrichmentType, ResourceKind};
pub use filters::{FieldPolicy, IncludeExclude, LocationFilter, LocationItem, SearchFilters};
