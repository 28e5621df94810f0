use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{debug, info, info_span, warn, Instrument};

use rl_core::ports::{EquivalenceOraclePort, ImageFetcherPort, RetrievalError};
use rl_core::{
    Aggregation, ComparisonOutcome, ImageAsset, ImageReference, ReferenceSet, SkippedCandidate,
};

/// Compare every candidate reference against an already fetched target image.
/// 将每个候选引用与已获取的目标图片进行比较。
///
/// A candidate that cannot be fetched is skipped and never matches; the
/// remaining candidates are still evaluated. Results are always reported in
/// candidate order, whatever the concurrency.
pub struct AggregateMatchesUseCase {
    image_fetcher: Arc<dyn ImageFetcherPort>,
    oracle: Arc<dyn EquivalenceOraclePort>,
    max_concurrency: usize,
}

impl AggregateMatchesUseCase {
    /// `max_concurrency` of `0` is treated as `1` (sequential).
    pub fn new(
        image_fetcher: Arc<dyn ImageFetcherPort>,
        oracle: Arc<dyn EquivalenceOraclePort>,
        max_concurrency: usize,
    ) -> Self {
        Self {
            image_fetcher,
            oracle,
            max_concurrency: max_concurrency.max(1),
        }
    }

    pub async fn execute(
        &self,
        target: &ImageReference,
        target_asset: &ImageAsset,
        candidates: &ReferenceSet,
    ) -> Aggregation {
        let span = info_span!(
            "usecase.matching.aggregate.execute",
            target = %target,
            candidate_count = candidates.len(),
            max_concurrency = self.max_concurrency,
        );

        async {
            // `buffered` yields in input order even when futures finish out of order.
            let evaluations: Vec<Result<bool, RetrievalError>> = stream::iter(candidates.iter())
                .map(|candidate| self.evaluate(target_asset, candidate))
                .buffered(self.max_concurrency)
                .collect()
                .await;

            let mut aggregation = Aggregation::default();
            for (candidate, evaluation) in candidates.iter().zip(evaluations) {
                match evaluation {
                    Ok(equivalent) => {
                        if equivalent {
                            aggregation.matches.push(candidate.clone());
                        }
                        aggregation.comparisons.push(ComparisonOutcome {
                            target: target.clone(),
                            candidate: candidate.clone(),
                            equivalent,
                        });
                    }
                    Err(err) => aggregation.skipped.push(SkippedCandidate {
                        reference: candidate.clone(),
                        reason: err.to_string(),
                    }),
                }
            }

            info!(
                matched = aggregation.matches.len(),
                compared = aggregation.comparisons.len(),
                skipped = aggregation.skipped.len(),
                "Candidate aggregation finished"
            );
            aggregation
        }
        .instrument(span)
        .await
    }

    async fn evaluate(
        &self,
        target_asset: &ImageAsset,
        candidate: &ImageReference,
    ) -> Result<bool, RetrievalError> {
        let asset = match self.image_fetcher.fetch(candidate).await {
            Ok(asset) => asset,
            Err(err) => {
                warn!(
                    candidate = %candidate,
                    error = %err,
                    "Skipping candidate image that could not be fetched"
                );
                return Err(err);
            }
        };

        let equivalent = self.oracle.compare(target_asset, &asset).await;
        debug!(
            candidate = %candidate,
            media_type = %asset.media_type(),
            equivalent,
            "Candidate compared"
        );
        Ok(equivalent)
    }
}
