use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use rl_core::ports::{ImageFetcherPort, RetrievalError};
use rl_core::{ImageAsset, ImageReference, MediaType};

/// Retrieves images by issuing a plain `GET` on the reference itself.
///
/// The reference is used verbatim as the URL. Relative or malformed
/// references fail as transport errors; no base-URL resolution happens here.
pub struct HttpImageFetcher {
    client: reqwest::Client,
}

impl HttpImageFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageFetcherPort for HttpImageFetcher {
    async fn fetch(&self, reference: &ImageReference) -> Result<ImageAsset, RetrievalError> {
        let transport = |err: reqwest::Error| RetrievalError::Transport {
            reference: reference.clone(),
            message: err.to_string(),
        };

        let response = self
            .client
            .get(reference.as_str())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::Status {
                reference: reference.clone(),
                status: status.as_u16(),
            });
        }

        let media_type = MediaType::from_declared(
            response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
        );
        let bytes = response.bytes().await.map_err(transport)?;

        debug!(
            reference = %reference,
            media_type = %media_type,
            size = bytes.len(),
            "Fetched image"
        );
        Ok(ImageAsset::from_bytes(&bytes, media_type))
    }
}
