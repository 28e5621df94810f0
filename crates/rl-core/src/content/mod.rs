//! Content markup handling: reference extraction and literal rewriting.
//! 内容标记处理：图片引用提取与字面替换。

pub mod extractor;
pub mod rewriter;

pub use extractor::{extract_references, ReferenceSet};
pub use rewriter::{overlapping_matches, rewrite, shadowed_references, RewriteOutcome};
