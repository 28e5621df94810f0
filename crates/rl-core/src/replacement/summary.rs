use serde::Serialize;

use super::SkippedCandidate;
use crate::{ImageReference, MatchSet};

/// Terminal result of one replacement run.
/// 一次替换运行的最终结果。
///
/// Only the constructors below build a summary, which keeps
/// `matches_found <= images_found` and `replacements == 0` whenever
/// `matches_found == 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplacementSummary {
    pub success: bool,
    pub message: String,
    pub images_found: usize,
    pub matches_found: usize,
    pub replacements: usize,
    pub matched_references: Vec<ImageReference>,
    pub skipped_references: Vec<SkippedCandidate>,
}

impl ReplacementSummary {
    /// The content holds no image references at all.
    pub fn nothing_found() -> Self {
        Self {
            success: false,
            message: "No images found in the article.".to_string(),
            images_found: 0,
            matches_found: 0,
            replacements: 0,
            matched_references: Vec::new(),
            skipped_references: Vec::new(),
        }
    }

    /// Images were found but none matched the reference image.
    pub fn no_matches(images_found: usize, skipped: Vec<SkippedCandidate>) -> Self {
        Self {
            success: false,
            message: format!(
                "Found {images_found} image(s), but none matched the reference image."
            ),
            images_found,
            matches_found: 0,
            replacements: 0,
            matched_references: Vec::new(),
            skipped_references: skipped,
        }
    }

    /// Matches were rewritten and the article persisted.
    ///
    /// `matches` must be non-empty and drawn from the `images_found`
    /// extracted references; every match occurs at least once in the content
    /// it was extracted from, so `occurrences` is non-zero.
    pub fn replaced(
        images_found: usize,
        matches: MatchSet,
        occurrences: usize,
        skipped: Vec<SkippedCandidate>,
    ) -> Self {
        debug_assert!(!matches.is_empty());
        debug_assert!(matches.len() <= images_found);
        debug_assert!(occurrences > 0);

        let matches_found = matches.len();
        Self {
            success: true,
            message: format!(
                "Replaced {occurrences} occurrence(s) of {matches_found} matching image(s)."
            ),
            images_found,
            matches_found,
            replacements: occurrences,
            matched_references: matches.into_inner(),
            skipped_references: skipped,
        }
    }
}
