//! Business logic use cases
//!
//! ReplaceArticleImageUseCase
//!         ↓
//! fetch article → extract references → fetch target image
//!         ↓
//! AggregateMatchesUseCase (fetch + compare per candidate)
//!         ↓
//! rewrite → persist article → ReplacementSummary

pub mod aggregate_matches;
pub mod replace_article_image;

pub use aggregate_matches::AggregateMatchesUseCase;
pub use replace_article_image::{ReplaceArticleImageUseCase, ReplaceError};
