//! Matching results and the terminal replacement summary.
//! 匹配结果与最终替换摘要。

mod match_set;
mod outcome;
mod summary;

pub use match_set::MatchSet;
pub use outcome::{Aggregation, ComparisonOutcome, SkippedCandidate};
pub use summary::ReplacementSummary;
