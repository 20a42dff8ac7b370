use thiserror::Error;

/// Gateway-wide error model for uniform tool/RPC mapping.
///
/// The upstream variant deliberately carries the raw body text so a caller
/// can diagnose an API failure without this layer interpreting
/// domain-specific error codes.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),

    #[error("upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl GatewayError {
    pub fn validation(msg: impl Into<String>) -> Self {
        GatewayError::Validation(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, GatewayError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_displays_upstream_status_and_body() {
        let e = GatewayError::Upstream {
            status: 404,
            body: "Not found".into(),
        };
        assert_eq!(e.to_string(), "upstream returned 404: Not found");
    }

    #[test]
    fn it_displays_validation_message_verbatim() {
        let e = GatewayError::validation("mutually exclusive parameters");
        assert_eq!(e.to_string(), "mutually exclusive parameters");
        assert!(e.is_validation());
    }

    #[test]
    fn config_errors_are_not_validation() {
        let e = GatewayError::Config("CR_API_KEY environment variable is required".into());
        assert!(!e.is_validation());
        assert!(e.to_string().starts_with("configuration error"));
    }
}
