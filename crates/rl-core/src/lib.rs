//! # rl-core
//!
//! Core domain models and business logic for relink.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! reference extraction, literal content rewriting, verdict parsing and the
//! ports implemented by `rl-infra`.

// Public module exports
pub mod article;
pub mod config;
pub mod content;
pub mod equivalence;
pub mod ids;
pub mod image;
pub mod ports;
pub mod replacement;

// Re-export commonly used types at the crate root
pub use article::Article;
pub use config::AppConfig;
pub use content::{extract_references, rewrite, ReferenceSet, RewriteOutcome};
pub use ids::{ArticleId, ImageReference};
pub use image::{ImageAsset, MediaType};
pub use replacement::{
    Aggregation, ComparisonOutcome, MatchSet, ReplacementSummary, SkippedCandidate,
};
