pub fn init() {
    // Initialize tracing subscriber once, honoring RUST_LOG if set.
    // Default to info level; allow override via RUST_LOG (e.g., "debug").
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

/// Emit one metric both as a structured log line and through the `metrics`
/// facade (a no-op until a recorder/exporter is installed).
pub fn log_metric(tool: &str, metric: &str, value: f64) {
    tracing::info!(tool = tool, metric = metric, value = value, "metric");
    metrics::histogram!(metric.to_string(), "tool" => tool.to_string()).record(value);
}

/// Counter sibling of [`log_metric`] for monotonic totals.
pub fn count_metric(tool: &str, metric: &str, value: u64) {
    tracing::info!(tool = tool, metric = metric, value = value, "metric");
    metrics::counter!(metric.to_string(), "tool" => tool.to_string()).increment(value);
}
