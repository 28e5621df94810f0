//! Article domain model

use serde::{Deserialize, Serialize};

use crate::ArticleId;

/// An article as held by the content store.
/// 内容存储中的文章。
///
/// `body` is markup text containing zero or more image references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub body: String,
}

impl Article {
    pub fn new(id: ArticleId, body: impl Into<String>) -> Self {
        Self {
            id,
            body: body.into(),
        }
    }
}
