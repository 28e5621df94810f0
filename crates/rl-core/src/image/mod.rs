//! Retrieved image assets

mod asset;
mod media_type;

pub use asset::ImageAsset;
pub use media_type::{MediaType, DEFAULT_IMAGE_MEDIA_TYPE};
