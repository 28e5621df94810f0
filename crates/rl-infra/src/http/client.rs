use std::time::Duration;

/// Settings for the shared HTTP client (already defaulted by the caller).
#[derive(Debug, Clone)]
pub struct HttpClientSettings {
    pub timeout: Duration,
    pub user_agent: String,
}

/// Build the reqwest client shared by every adapter.
///
/// One client means one connection pool for the content store, the image
/// hosts and the oracle.
pub fn build_http_client(settings: &HttpClientSettings) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(settings.timeout)
        .user_agent(settings.user_agent.as_str())
        .build()
}
