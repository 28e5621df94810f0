use async_trait::async_trait;

use crate::ImageAsset;

/// Judge of visual equivalence between two images.
/// 判断两张图片视觉上是否等价。
///
/// Best-effort: implementations resolve every failure or ambiguous answer to
/// `false` and never surface an error.
#[async_trait]
pub trait EquivalenceOraclePort: Send + Sync {
    async fn compare(&self, a: &ImageAsset, b: &ImageAsset) -> bool;
}
