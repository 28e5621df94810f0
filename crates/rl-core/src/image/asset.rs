use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use super::MediaType;

/// Retrieved form of an image reference.
/// 图片引用获取后的内容（编码后的字节 + 媒体类型）。
///
/// The payload is kept base64-encoded so it can be handed to text-based
/// services as-is. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    data: String,
    media_type: MediaType,
}

impl ImageAsset {
    pub fn from_bytes(bytes: &[u8], media_type: MediaType) -> Self {
        Self {
            data: BASE64.encode(bytes),
            media_type,
        }
    }

    /// Base64 payload.
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn media_type(&self) -> &MediaType {
        &self.media_type
    }

    /// Decode the payload back to the original bytes.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        BASE64.decode(&self.data)
    }

    /// `data:` URL form used by vision endpoints.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data)
    }
}
