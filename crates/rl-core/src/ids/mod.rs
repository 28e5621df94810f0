//! ID type wrappers for type safety.

mod id_macro;

use serde::{Deserialize, Serialize};

use id_macro::impl_id;

/// Identifier of an article in the content store.
/// 内容存储中文章的标识符。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(String);

/// An image locator exactly as it appears in content markup.
/// 内容标记中原样出现的图片地址。
///
/// Two references are the same image reference only if their strings are
/// byte-for-byte equal: `https://x/a.png` and `https://X/a.png` are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageReference(String);

impl_id!(ArticleId, ImageReference);
