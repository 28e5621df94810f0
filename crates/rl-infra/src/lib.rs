pub mod content_store;
pub mod http;
pub mod image;
pub mod oracle;

pub use content_store::HttpArticleStore;
pub use http::{build_http_client, HttpClientSettings};
pub use image::HttpImageFetcher;
pub use oracle::OpenAiVisionOracle;
