//! Visual-equivalence prompt and verdict parsing.
//!
//! The oracle answers in free text; only two tokens are accepted as a
//! verdict. Anything else is ambiguous and callers must treat it as
//! "no match".

/// Instruction sent to the oracle together with the two images.
pub const EQUIVALENCE_INSTRUCTION: &str = "You are given two images. \
Decide whether they depict the same image or a substantially similar image. \
Differences caused by resizing, cropping to the same subject, re-encoding or \
compression do not count as differences. \
Answer with exactly one word: YES if they are the same image, NO otherwise.";

const TRUE_TOKEN: &str = "yes";
const FALSE_TOKEN: &str = "no";

/// Parse an oracle answer into a verdict.
///
/// The answer is trimmed and ASCII case-folded, then must equal one of the
/// two recognized tokens exactly. Returns `None` for anything else.
///
/// # Examples
///
/// ```
/// use rl_core::equivalence::parse_verdict;
///
/// assert_eq!(parse_verdict("  YES\n"), Some(true));
/// assert_eq!(parse_verdict("No"), Some(false));
/// assert_eq!(parse_verdict("Yes, they match."), None);
/// ```
pub fn parse_verdict(answer: &str) -> Option<bool> {
    let normalized = answer.trim().to_ascii_lowercase();
    match normalized.as_str() {
        TRUE_TOKEN => Some(true),
        FALSE_TOKEN => Some(false),
        _ => None,
    }
}
