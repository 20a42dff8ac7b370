use reqwest::{Client, StatusCode};
use std::time::Instant;

use crate::core::error::GatewayError;
use crate::infra::config::Config;
use crate::infra::http::headers::add_standard_headers;
use crate::infra::runtime::limits::make_http_client;

/// Thin client for the Clash Royale REST API.
///
/// Holds the immutable base URL and bearer credential for the process
/// lifetime; each `get` is a stateless single-shot GET with two terminal
/// outcomes (decoded JSON, or an error carrying the upstream status and raw
/// body). No retries, no caching: failures propagate immediately so callers
/// see exactly what the upstream said.
#[derive(Clone)]
pub struct RoyaleClient {
    base: String,
    token: String,
    http: Client,
}

impl RoyaleClient {
    pub fn new(base: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            token: token.into(),
            http: make_http_client(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.base_url.clone(), cfg.api_key.clone())
    }

    /// GET `{base}/{endpoint}` and decode the body.
    ///
    /// `endpoint` is a relative path that already carries any encoded tag
    /// segment and query suffix; it is used verbatim.
    pub async fn get(&self, endpoint: &str) -> Result<serde_json::Value, GatewayError> {
        let url = format!("{}/{}", self.base.trim_end_matches('/'), endpoint);
        tracing::debug!(endpoint = %endpoint, "royale.get request");

        let start = Instant::now();
        let (builder, _rid) =
            add_standard_headers(self.http.get(url).bearer_auth(&self.token), None);
        let resp = builder.send().await?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            crate::infra::logging::log_metric("royale.get", "upstream_error_total", 1.0);
            tracing::warn!(status = status.as_u16(), endpoint = %endpoint, "upstream error");
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let value = resp.json::<serde_json::Value>().await?;
        let elapsed_ms = start.elapsed().as_millis() as f64;
        crate::infra::logging::log_metric("royale.get", "upstream_latency_ms", elapsed_ms);
        Ok(value)
    }
}
