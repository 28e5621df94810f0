use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use rl_core::content::{overlapping_matches, shadowed_references};
use rl_core::ports::{ArticleStorePort, ContentStoreError, ImageFetcherPort, RetrievalError};
use rl_core::{extract_references, rewrite, ArticleId, ImageReference, ReplacementSummary};

use super::AggregateMatchesUseCase;

/// Top-level failures of a replacement run.
///
/// Everything else, including per-candidate failures, is reported through
/// the returned [`ReplacementSummary`].
#[derive(Debug, thiserror::Error)]
pub enum ReplaceError {
    #[error("article {article_id} could not be retrieved: {source}")]
    ArticleNotFound {
        article_id: ArticleId,
        #[source]
        source: ContentStoreError,
    },
    #[error("reference image could not be retrieved: {0}")]
    TargetImage(#[source] RetrievalError),
    #[error("article {article_id} could not be saved: {source}")]
    Persist {
        article_id: ArticleId,
        #[source]
        source: ContentStoreError,
    },
}

/// Replace every image in an article that looks like the reference image.
/// 将文章中与参考图片视觉等价的所有图片替换为新图片。
///
/// FetchArticle → ExtractReferences → {done if empty} → FetchTargetAsset →
/// Aggregate → {done if no matches} → Rewrite → PersistArticle → Done
///
/// The rewrite is computed fully in memory before the single write, so a
/// rejected write leaves the stored article as it was.
pub struct ReplaceArticleImageUseCase {
    article_store: Arc<dyn ArticleStorePort>,
    image_fetcher: Arc<dyn ImageFetcherPort>,
    aggregate: AggregateMatchesUseCase,
}

impl ReplaceArticleImageUseCase {
    pub fn new(
        article_store: Arc<dyn ArticleStorePort>,
        image_fetcher: Arc<dyn ImageFetcherPort>,
        aggregate: AggregateMatchesUseCase,
    ) -> Self {
        Self {
            article_store,
            image_fetcher,
            aggregate,
        }
    }

    /// Inputs are assumed present and non-empty; callers validate them.
    pub async fn execute(
        &self,
        article_id: &ArticleId,
        old_reference: &ImageReference,
        new_reference: &ImageReference,
    ) -> Result<ReplacementSummary, ReplaceError> {
        let span = info_span!(
            "usecase.replacement.replace_article_image.execute",
            article_id = %article_id,
            old_reference = %old_reference,
            new_reference = %new_reference,
        );

        async {
            let article = self
                .article_store
                .get_article(article_id)
                .await
                .map_err(|source| ReplaceError::ArticleNotFound {
                    article_id: article_id.clone(),
                    source,
                })?;

            let candidates = extract_references(&article.body);
            if candidates.is_empty() {
                info!("No image references in article; nothing to do");
                return Ok(ReplacementSummary::nothing_found());
            }
            info!(images_found = candidates.len(), "Extracted image references");

            let target_asset = self
                .image_fetcher
                .fetch(old_reference)
                .await
                .map_err(ReplaceError::TargetImage)?;

            let aggregation = self
                .aggregate
                .execute(old_reference, &target_asset, &candidates)
                .await;

            if aggregation.matches.is_empty() {
                info!(
                    images_found = candidates.len(),
                    skipped = aggregation.skipped.len(),
                    "No image matched the reference image"
                );
                return Ok(ReplacementSummary::no_matches(
                    candidates.len(),
                    aggregation.skipped,
                ));
            }

            for collision in shadowed_references(&aggregation.matches, &candidates) {
                warn!(
                    matched = %collision.matched,
                    shadowed = %collision.shadowed,
                    "Matched reference is a substring of an unmatched reference; it will be rewritten too"
                );
            }

            for overlap in overlapping_matches(&aggregation.matches) {
                warn!(
                    matched = %overlap.matched,
                    containing = %overlap.shadowed,
                    "Matched references overlap; the longer one is replaced whole at each position"
                );
            }

            let outcome = rewrite(&article.body, &aggregation.matches, new_reference);

            self.article_store
                .update_article(article_id, &outcome.updated_content)
                .await
                .map_err(|source| ReplaceError::Persist {
                    article_id: article_id.clone(),
                    source,
                })?;

            info!(
                matches_found = aggregation.matches.len(),
                replacements = outcome.occurrences,
                "Article updated"
            );

            Ok(ReplacementSummary::replaced(
                candidates.len(),
                aggregation.matches,
                outcome.occurrences,
                aggregation.skipped,
            ))
        }
        .instrument(span)
        .await
    }
}
