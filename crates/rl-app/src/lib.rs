//! relink Application Orchestration Layer
//!
//! This crate contains the matching and replacement use cases. Remote
//! collaborators are reached only through `rl_core::ports`.

pub mod app;
pub mod deps;
pub mod usecases;

pub use app::{App, UseCases};
pub use deps::{AppDeps, MatchingOptions};
pub use usecases::{AggregateMatchesUseCase, ReplaceArticleImageUseCase, ReplaceError};
