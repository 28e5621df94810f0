//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the matching and rewrite pipeline to be tested with
//! deterministic stubs instead of the real remote services.
//!
//! ## Port Placement Guidelines
//!
//! A port belongs here when it represents a remote capability the pipeline
//! consumes (content store, image hosts, equivalence oracle) and is
//! implemented by `rl-infra`.

pub mod article_store;
pub mod equivalence_oracle;
pub mod errors;
pub mod image_fetcher;

pub use article_store::ArticleStorePort;
pub use equivalence_oracle::EquivalenceOraclePort;
pub use errors::{ContentStoreError, RetrievalError};
pub use image_fetcher::ImageFetcherPort;
