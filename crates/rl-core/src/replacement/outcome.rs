use serde::Serialize;

use crate::{ImageReference, MatchSet};

/// Verdict for one candidate compared against the target image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonOutcome {
    pub target: ImageReference,
    pub candidate: ImageReference,
    pub equivalent: bool,
}

/// A candidate excluded from matching because it could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedCandidate {
    pub reference: ImageReference,
    pub reason: String,
}

/// Everything the match aggregation learned about the candidates.
/// 匹配聚合的结果：匹配集、比较结果与被跳过的候选。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    pub matches: MatchSet,
    /// One entry per candidate that reached the oracle, in candidate order.
    pub comparisons: Vec<ComparisonOutcome>,
    pub skipped: Vec<SkippedCandidate>,
}
