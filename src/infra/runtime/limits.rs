use std::time::Duration;

/// Build a reqwest client with bounded timeouts.
///
/// The gateway performs no retries, so a hung upstream must be cut off by
/// the transport itself.
pub fn make_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(2))
        .timeout(Duration::from_secs(10))
        .build()
        .expect("reqwest client")
}

#[cfg(test)]
mod tests {
    #[test]
    fn client_builds_with_defaults() {
        let _ = super::make_http_client();
    }
}
