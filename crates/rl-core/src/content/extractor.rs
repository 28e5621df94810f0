use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::ImageReference;

/// Distinct image references in first-seen order.
pub type ReferenceSet = IndexSet<ImageReference>;

// The tag body is consumed one quoted value at a time, so a `>` or a
// `src=` inside another attribute's value is never taken for markup.
// `src` must be preceded by whitespace so `data-src` and friends are skipped.
static IMG_SRC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?is)<img\b(?:[^>"']|"[^"]*"|'[^']*')*?\ssrc\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#,
    )
    .expect("img src pattern is valid")
});

/// Extract the distinct set of image references from markup.
///
/// Tag and attribute names match case-insensitively and `src` may appear in
/// any position among the tag's attributes. Values are returned verbatim,
/// without any well-formedness check; a malformed locator simply fails later
/// at fetch time. Empty values are ignored.
///
/// # Examples
///
/// ```
/// use rl_core::extract_references;
///
/// let refs = extract_references(r#"<p><IMG alt="x" SRC="https://x/a.png"></p>"#);
/// assert_eq!(refs.len(), 1);
/// assert_eq!(refs[0].as_str(), "https://x/a.png");
/// ```
pub fn extract_references(content: &str) -> ReferenceSet {
    IMG_SRC
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
        .filter(|value| !value.as_str().is_empty())
        .map(|value| ImageReference::from(value.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_strs(refs: &ReferenceSet) -> Vec<&str> {
        refs.iter().map(ImageReference::as_str).collect()
    }

    #[test]
    fn test_empty_content_yields_empty_set() {
        assert!(extract_references("").is_empty());
        assert!(extract_references("<p>no images here</p>").is_empty());
    }

    #[test]
    fn test_duplicates_removed_in_first_seen_order() {
        let content = r#"
            <img src="https://x/b.png">
            <img src="https://x/a.png">
            <img src="https://x/b.png">
            <img src="https://x/c.png">
            <img src="https://x/a.png">
        "#;

        let refs = extract_references(content);

        assert_eq!(
            as_strs(&refs),
            vec!["https://x/b.png", "https://x/a.png", "https://x/c.png"]
        );
    }

    #[test]
    fn test_src_in_any_attribute_position_and_case() {
        let content = r#"
            <img class="hero" width="300" src="https://x/first.png" alt="first">
            <IMG Src='https://x/second.png'/>
            <img
                loading="lazy"
                SRC = "https://x/third.png"
            >
            <img src=https://x/fourth.png alt=unquoted>
        "#;

        let refs = extract_references(content);

        assert_eq!(
            as_strs(&refs),
            vec![
                "https://x/first.png",
                "https://x/second.png",
                "https://x/third.png",
                "https://x/fourth.png",
            ]
        );
    }

    #[test]
    fn test_ignores_non_img_tags_and_lookalike_attributes() {
        let content = r#"
            <script src="https://x/app.js"></script>
            <img data-src="https://x/lazy.png" srcset="https://x/a-2x.png 2x">
            <imgx src="https://x/not-an-img.png">
            <img alt="real" src="https://x/real.png">
        "#;

        let refs = extract_references(content);

        assert_eq!(as_strs(&refs), vec!["https://x/real.png"]);
    }

    #[test]
    fn test_values_are_passed_through_unvalidated() {
        let content = r#"<img src="not a url"><img src="https://x/a.png?v=2&amp;w=10"><img src="">"#;

        let refs = extract_references(content);

        assert_eq!(
            as_strs(&refs),
            vec!["not a url", "https://x/a.png?v=2&amp;w=10"]
        );
    }

    #[test]
    fn test_quoted_values_of_other_attributes_do_not_end_the_tag() {
        let content = r#"<img alt="a > b" src="https://x/real.png"><img title='x > y' src=https://x/other.png>"#;

        let refs = extract_references(content);

        assert_eq!(
            as_strs(&refs),
            vec!["https://x/real.png", "https://x/other.png"]
        );
    }

    #[test]
    fn test_src_text_inside_another_attribute_is_not_a_reference() {
        let content = r#"
            <img title="see src=fake" src="https://x/real.png">
            <img alt='src="also-fake"' data-note=" src=x" SRC="https://x/second.png">
        "#;

        let refs = extract_references(content);

        assert_eq!(
            as_strs(&refs),
            vec!["https://x/real.png", "https://x/second.png"]
        );
    }
}
