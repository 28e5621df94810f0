use regex::{NoExpand, Regex, RegexBuilder};

use crate::{ImageReference, MatchSet, ReferenceSet};

/// Result of rewriting content against a [`MatchSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub updated_content: String,
    /// Literal occurrences replaced across all matched references.
    pub occurrences: usize,
}

/// An extracted reference that contains a matched reference as a proper
/// substring and will therefore be altered by the literal rewrite too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowedReference {
    pub matched: ImageReference,
    pub shadowed: ImageReference,
}

/// Replace every literal occurrence of each matched reference with `replacement`.
///
/// Matched references are escaped and combined into one alternation, longest
/// first, and the content is rewritten in a single left-to-right pass. The
/// replacement text is inserted verbatim (no `$` expansion) and is never
/// re-scanned, so `occurrences` always counts occurrences of the original
/// content.
///
/// When one matched reference contains another (`a.png` and `a.png?v=2`
/// both matched), the longer literal wins at each position. Replacing one
/// reference at a time would instead corrupt the longer one through the
/// shorter. [`overlapping_matches`] reports such pairs so callers can flag
/// them.
///
/// An empty match set leaves the content untouched.
pub fn rewrite(content: &str, matches: &MatchSet, replacement: &ImageReference) -> RewriteOutcome {
    let literals = distinct_literals(matches);
    if literals.is_empty() {
        return RewriteOutcome {
            updated_content: content.to_string(),
            occurrences: 0,
        };
    }

    match literal_alternation(&literals) {
        Some(pattern) => {
            let occurrences = pattern.find_iter(content).count();
            let updated_content = pattern
                .replace_all(content, NoExpand(replacement.as_str()))
                .into_owned();
            RewriteOutcome {
                updated_content,
                occurrences,
            }
        }
        None => replace_sequentially(content, &literals, replacement.as_str()),
    }
}

/// Find unmatched extracted references that embed a matched reference,
/// e.g. `a.png?v=2` when only `a.png` matched.
///
/// The rewrite keeps exact-substring semantics; callers use this to flag
/// the collision.
pub fn shadowed_references(matches: &MatchSet, extracted: &ReferenceSet) -> Vec<ShadowedReference> {
    let mut shadowed = Vec::new();
    for candidate in extracted.iter().filter(|r| !matches.contains(r)) {
        for matched in matches.iter() {
            if !matched.is_empty() && candidate.contains(matched.as_str()) {
                shadowed.push(ShadowedReference {
                    matched: matched.clone(),
                    shadowed: candidate.clone(),
                });
            }
        }
    }
    shadowed
}

/// Find pairs of matched references where one contains the other as a
/// proper substring. `matched` is the shorter, `shadowed` the longer.
pub fn overlapping_matches(matches: &MatchSet) -> Vec<ShadowedReference> {
    let mut overlapping = Vec::new();
    for longer in matches.iter() {
        for shorter in matches.iter() {
            if !shorter.is_empty()
                && shorter.len() < longer.len()
                && longer.contains(shorter.as_str())
            {
                overlapping.push(ShadowedReference {
                    matched: shorter.clone(),
                    shadowed: longer.clone(),
                });
            }
        }
    }
    overlapping
}

fn distinct_literals(matches: &MatchSet) -> Vec<&str> {
    let mut literals: Vec<&str> = matches
        .iter()
        .map(ImageReference::as_str)
        .filter(|literal| !literal.is_empty())
        .collect();
    // Longest first so a leftmost-first alternation prefers the longer literal.
    literals.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    literals.dedup();
    literals
}

fn literal_alternation(literals: &[&str]) -> Option<Regex> {
    let pattern = literals
        .iter()
        .map(|literal| regex::escape(literal))
        .collect::<Vec<_>>()
        .join("|");

    RegexBuilder::new(&pattern)
        .size_limit(64 * (1 << 20))
        .build()
        .ok()
}

// Fallback for match sets too large to compile into one pattern.
fn replace_sequentially(content: &str, literals: &[&str], replacement: &str) -> RewriteOutcome {
    let mut updated_content = content.to_string();
    let mut occurrences = 0;
    for literal in literals {
        occurrences += updated_content.matches(literal).count();
        updated_content = updated_content.replace(literal, replacement);
    }
    RewriteOutcome {
        updated_content,
        occurrences,
    }
}
