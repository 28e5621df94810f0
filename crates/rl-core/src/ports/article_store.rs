use async_trait::async_trait;

use super::errors::ContentStoreError;
use crate::{Article, ArticleId};

/// Article persistence owned by the external content store.
/// 外部内容存储的文章读写端口。
#[async_trait]
pub trait ArticleStorePort: Send + Sync {
    /// Load an article.
    ///
    /// Error semantics:
    /// - NotFound : unknown id
    /// - Rejected : any other non-success answer
    /// - Transport: network failure
    async fn get_article(&self, id: &ArticleId) -> Result<Article, ContentStoreError>;

    /// Replace the article body.
    async fn update_article(&self, id: &ArticleId, body: &str) -> Result<(), ContentStoreError>;
}
