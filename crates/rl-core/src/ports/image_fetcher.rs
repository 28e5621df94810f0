use async_trait::async_trait;

use super::errors::RetrievalError;
use crate::{ImageAsset, ImageReference};

#[async_trait]
pub trait ImageFetcherPort: Send + Sync {
    /// Retrieve one image. One outbound read per call, no retry.
    async fn fetch(&self, reference: &ImageReference) -> Result<ImageAsset, RetrievalError>;
}
