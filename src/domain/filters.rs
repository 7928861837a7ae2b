//! ICP search filters and the wire-shape normalizer.
//!
//! The remote API is strict about body shape: the two boolean flags must
//! always be present, an include/exclude filter supplied with nothing in it
//! collapses to `{"include": []}` (legacy marker), flat-array filters are
//! sent bare with no wrapper, and nulls must never leak into location
//! arrays. All of that is one declarative policy table consulted by
//! [`SearchFilters::normalize`]; the structs themselves carry canonical
//! snake_case names and accept camelCase only as input aliases.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Values to include and/or exclude for one filter dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludeExclude {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
}

impl IncludeExclude {
    pub fn include(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        IncludeExclude {
            include: Some(values.into_iter().map(Into::into).collect()),
            exclude: None,
        }
    }
}

/// One location: a place id or a city/state/country triple. Both may be
/// supplied; the remote API is the authority on semantic validity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationItem {
    #[serde(default, alias = "placeId", skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Location filter with include/exclude lists of [`LocationItem`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<LocationItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<LocationItem>>,
}

/// ICP filters for SuperSearch lead discovery. All optional except the two
/// boolean flags, which the remote API requires on every body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<LocationFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<IncludeExclude>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Vec<String>>,
    #[serde(default, alias = "companyName", skip_serializing_if = "Option::is_none")]
    pub company_name: Option<IncludeExclude>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<IncludeExclude>,
    #[serde(default, alias = "employeeCount", skip_serializing_if = "Option::is_none")]
    pub employee_count: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,
    #[serde(default, alias = "lookAlike", skip_serializing_if = "Option::is_none")]
    pub look_alike: Option<String>,
    #[serde(default, alias = "keywordFilter", skip_serializing_if = "Option::is_none")]
    pub keyword_filter: Option<IncludeExclude>,
    #[serde(default, alias = "fundingType", skip_serializing_if = "Option::is_none")]
    pub funding_type: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news: Option<Vec<String>>,
    #[serde(default, alias = "skipOwnedLeads")]
    pub skip_owned_leads: bool,
    #[serde(default, alias = "showOneLeadPerCompany")]
    pub show_one_lead_per_company: bool,
}

/// How one filter field is carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPolicy {
    /// `{include, exclude}` wrapper; empty lists are dropped, and a filter
    /// supplied with nothing in it collapses to `{"include": []}`.
    IncludeExclude,
    /// Bare string array, no wrapper; omitted when unset or empty.
    FlatArray,
    /// Plain scalar; omitted when unset.
    Scalar,
    /// Nested include/exclude lists of location objects; the whole field is
    /// omitted when nothing remains after null suppression.
    Location,
    /// Always present; inserted as `false` when not supplied. The API
    /// rejects bodies missing these.
    BoolDefaultFalse,
}

/// Field-by-field wire policy, in wire order.
pub const FIELD_POLICIES: &[(&str, FieldPolicy)] = &[
    ("locations", FieldPolicy::Location),
    ("title", FieldPolicy::IncludeExclude),
    ("department", FieldPolicy::FlatArray),
    ("level", FieldPolicy::FlatArray),
    ("company_name", FieldPolicy::IncludeExclude),
    ("industry", FieldPolicy::IncludeExclude),
    ("employee_count", FieldPolicy::FlatArray),
    ("revenue", FieldPolicy::FlatArray),
    ("domains", FieldPolicy::FlatArray),
    ("look_alike", FieldPolicy::Scalar),
    ("keyword_filter", FieldPolicy::IncludeExclude),
    ("funding_type", FieldPolicy::FlatArray),
    ("news", FieldPolicy::FlatArray),
    ("skip_owned_leads", FieldPolicy::BoolDefaultFalse),
    ("show_one_lead_per_company", FieldPolicy::BoolDefaultFalse),
];

impl SearchFilters {
    /// Produce the exact `search_filters` object the remote API expects.
    ///
    /// Purely syntactic: no semantic validation happens here (a location
    /// carrying both place_id and city passes through unchanged).
    pub fn normalize(&self) -> Map<String, Value> {
        let mut raw = match serde_json::to_value(self) {
            Ok(Value::Object(m)) => m,
            _ => Map::new(),
        };
        let mut out = Map::new();
        for (name, policy) in FIELD_POLICIES {
            let entry = raw.remove(*name);
            match policy {
                FieldPolicy::IncludeExclude => {
                    if let Some(v) = entry {
                        out.insert((*name).to_string(), normalize_include_exclude(v));
                    }
                }
                FieldPolicy::FlatArray => {
                    if let Some(Value::Array(items)) = entry {
                        if !items.is_empty() {
                            out.insert((*name).to_string(), Value::Array(items));
                        }
                    }
                }
                FieldPolicy::Scalar => {
                    if let Some(v) = entry {
                        out.insert((*name).to_string(), v);
                    }
                }
                FieldPolicy::Location => {
                    if let Some(loc) = entry.and_then(normalize_location) {
                        out.insert((*name).to_string(), loc);
                    }
                }
                FieldPolicy::BoolDefaultFalse => {
                    out.insert((*name).to_string(), entry.unwrap_or(Value::Bool(false)));
                }
            }
        }
        out
    }
}

fn normalize_include_exclude(v: Value) -> Value {
    let mut m = match v {
        Value::Object(m) => m,
        _ => Map::new(),
    };
    m.retain(|_, v| v.as_array().is_some_and(|a| !a.is_empty()));
    if m.is_empty() {
        // Legacy marker: the API treats {"include": []} as "no constraint"
        // but rejects a bare {}.
        return json!({"include": []});
    }
    Value::Object(m)
}

fn normalize_location(v: Value) -> Option<Value> {
    let mut m = match v {
        Value::Object(m) => m,
        _ => return None,
    };
    // LocationItem nulls are already suppressed by serde; only empty
    // include/exclude lists are left to drop.
    m.retain(|_, v| v.as_array().is_some_and(|a| !a.is_empty()));
    if m.is_empty() {
        None
    } else {
        Some(Value::Object(m))
    }
}
