//! MCP gateway exposing SuperSearch lead discovery and enrichment tools.
//!
//! Each tool translates structured input into one HTTP call against the
//! remote SuperSearch enrichment API and annotates the JSON response with
//! next-step guidance. The only local logic worth the name is the filter
//! normalizer in [`domain::filters`], which shapes ICP filter input into
//! the exact body the remote API accepts.

pub mod api;
pub mod cli;
pub mod clients;
pub mod core;
pub mod domain;
pub mod infra;
pub mod tools;
