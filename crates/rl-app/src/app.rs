use std::sync::Arc;

use crate::deps::{AppDeps, MatchingOptions};
use crate::usecases::{AggregateMatchesUseCase, ReplaceArticleImageUseCase};

/// Assembled application: dependencies plus options, handing out use cases.
pub struct App {
    deps: AppDeps,
    options: MatchingOptions,
}

impl App {
    pub fn new(deps: AppDeps, options: MatchingOptions) -> Self {
        Self { deps, options }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases { app: self }
    }
}

/// Use case accessor. Each call builds a fresh use case; no state is shared
/// between invocations.
pub struct UseCases<'a> {
    app: &'a App,
}

impl UseCases<'_> {
    pub fn aggregate_matches(&self) -> AggregateMatchesUseCase {
        AggregateMatchesUseCase::new(
            Arc::clone(&self.app.deps.image_fetcher),
            Arc::clone(&self.app.deps.oracle),
            self.app.options.max_concurrency,
        )
    }

    pub fn replace_article_image(&self) -> ReplaceArticleImageUseCase {
        ReplaceArticleImageUseCase::new(
            Arc::clone(&self.app.deps.article_store),
            Arc::clone(&self.app.deps.image_fetcher),
            self.aggregate_matches(),
        )
    }
}
