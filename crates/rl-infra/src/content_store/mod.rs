mod http_article_store;

pub use http_article_store::HttpArticleStore;
