use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use rl_core::ports::{ArticleStorePort, ContentStoreError};
use rl_core::{Article, ArticleId};

use crate::http::endpoint;

const ARTICLES_SEGMENT: &str = "articles";

#[derive(Debug, Deserialize)]
struct ArticleResponse {
    body: String,
}

#[derive(Debug, Serialize)]
struct UpdateArticleRequest<'a> {
    body: &'a str,
}

/// REST content store: `GET`/`PUT {base_url}/articles/{id}` with a JSON
/// `{"body": ...}` document.
pub struct HttpArticleStore {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl HttpArticleStore {
    /// An empty `api_token` means anonymous access.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, api_token: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_token: api_token.filter(|token| !token.is_empty()),
        }
    }

    fn article_url(&self, id: &ArticleId) -> Result<reqwest::Url, ContentStoreError> {
        endpoint(&self.base_url, &[ARTICLES_SEGMENT, id.as_str()])
            .map_err(|err| ContentStoreError::Transport(err.to_string()))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, id: &ArticleId, request: RequestBuilder) -> Result<Response, ContentStoreError> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|err| ContentStoreError::Transport(err.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ContentStoreError::NotFound(id.clone()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ContentStoreError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ArticleStorePort for HttpArticleStore {
    async fn get_article(&self, id: &ArticleId) -> Result<Article, ContentStoreError> {
        let url = self.article_url(id)?;
        debug!(article_id = %id, url = %url, "Fetching article");

        let response = self.send(id, self.client.get(url)).await?;
        let payload: ArticleResponse = response
            .json()
            .await
            .map_err(|err| ContentStoreError::Decode(err.to_string()))?;

        Ok(Article::new(id.clone(), payload.body))
    }

    async fn update_article(&self, id: &ArticleId, body: &str) -> Result<(), ContentStoreError> {
        let url = self.article_url(id)?;
        debug!(article_id = %id, url = %url, body_len = body.len(), "Updating article");

        self.send(id, self.client.put(url).json(&UpdateArticleRequest { body }))
            .await?;
        Ok(())
    }
}
