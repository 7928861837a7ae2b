//! Process and remote-API configuration: env vars first, optional TOML file
//! at `SUPERSEARCH_CONFIG` underneath.

use serde::Deserialize;

/// Default base for the SuperSearch enrichment API.
pub const DEFAULT_BASE_URL: &str = "https://api.instantly.ai/api/v2";

/// Process-level settings (serve mode + HTTP port).
pub struct Config {
    pub mode: String, // "server" or "stdio"
    pub port: u16,
    pub deprecate_rest: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let mode = std::env::var("MODE").unwrap_or_else(|_| "server".into());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8080);
        let deprecate_rest = std::env::var("DEPRECATE_REST")
            .map(|v| !v.is_empty())
            .unwrap_or(false);

        Self {
            mode,
            port,
            deprecate_rest,
        }
    }
}

/// Remote API settings consumed by the SuperSearch client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    #[serde(default)]
    pub retries: Option<u32>,
}

impl ApiConfig {
    /// Load from the optional TOML file, then let env vars win.
    pub fn from_env_and_toml() -> Self {
        let mut cfg = std::env::var("SUPERSEARCH_CONFIG")
            .ok()
            .map(|path| Self::from_file(&path))
            .unwrap_or_default();

        if let Ok(v) = std::env::var("SUPERSEARCH_BASE_URL") {
            if !v.trim().is_empty() {
                cfg.base_url = Some(v);
            }
        }
        if let Ok(v) = std::env::var("SUPERSEARCH_API_KEY") {
            if !v.trim().is_empty() {
                cfg.api_key = Some(v);
            }
        }
        if let Ok(v) = std::env::var("SUPERSEARCH_TIMEOUT_MS") {
            if let Ok(ms) = v.parse::<u64>() {
                cfg.timeout_ms = Some(ms);
            }
        }
        if let Ok(v) = std::env::var("SUPERSEARCH_RETRIES") {
            if let Ok(n) = v.parse::<u32>() {
                cfg.retries = Some(n);
            }
        }
        cfg
    }

    pub fn from_file(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => toml::from_str(&text).unwrap_or_else(|e| {
                tracing::warn!(path = path, error = %e, "ignoring malformed config file");
                Self::default()
            }),
            Err(e) => {
                tracing::warn!(path = path, error = %e, "ignoring unreadable config file");
                Self::default()
            }
        }
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}
