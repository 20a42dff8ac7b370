pub fn init() {
    // Default the whole gateway to info; RUST_LOG overrides, e.g.
    // "royale_mcp_gateway=debug" to see per-endpoint dispatch lines.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

/// Emit a metric-style log line. `RoyaleClient` feeds this with upstream
/// latency and error counts; there is no separate metrics sink, the lines
/// are meant to be scraped from the log stream.
pub fn log_metric(tool: &str, metric: &str, value: f64) {
    tracing::info!(tool = tool, metric = metric, value = value, "metric");
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
    }

    #[test]
    fn log_metric_accepts_upstream_latency_lines() {
        super::init();
        super::log_metric("royale.get", "upstream_latency_ms", 12.5);
    }
}
