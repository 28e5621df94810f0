//! Shared reqwest client and endpoint helpers.

mod client;

pub use client::{build_http_client, HttpClientSettings};

use reqwest::Url;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EndpointError {
    #[error("invalid base url {base}: {reason}")]
    InvalidBase { base: String, reason: String },
}

/// Append path segments to a base URL, percent-encoding each segment.
///
/// A trailing slash on the base is ignored, so `https://h/api` and
/// `https://h/api/` give the same endpoint.
pub fn endpoint(base: &str, segments: &[&str]) -> Result<Url, EndpointError> {
    let invalid = |reason: String| EndpointError::InvalidBase {
        base: base.to_string(),
        reason,
    };

    let mut url = Url::parse(base).map_err(|err| invalid(err.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| invalid("cannot be a base".to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
