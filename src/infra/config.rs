use crate::core::error::GatewayError;

pub const DEFAULT_BASE_URL: &str = "https://api.clashroyale.com/v1";

#[derive(Debug)]
pub struct Config {
    pub mode: String, // "server" or "stdio"
    pub port: u16,
    pub deprecate_rest: bool,
    /// Bearer credential for the upstream API. Required; resolved once at
    /// startup and shared read-only for the process lifetime.
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    /// Resolve configuration from the environment.
    ///
    /// A missing or empty `CR_API_KEY` is fatal: the process must refuse to
    /// serve any tool rather than fail on the first request.
    pub fn from_env() -> Result<Self, GatewayError> {
        let api_key = std::env::var("CR_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| {
                GatewayError::Config("CR_API_KEY environment variable is required".into())
            })?;
        let mode = std::env::var("MODE").unwrap_or_else(|_| "server".into());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8080);
        let deprecate_rest = std::env::var("DEPRECATE_REST")
            .map(|v| !v.is_empty())
            .unwrap_or(false);
        let base_url =
            std::env::var("CR_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        Ok(Self {
            mode,
            port,
            deprecate_rest,
            api_key,
            base_url,
        })
    }
}
