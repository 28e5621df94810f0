//! Submit command
//! 提交命令

use std::fmt::Write as _;

use rl_app::App;
use rl_core::{ArticleId, ImageReference, ReplacementSummary};
use serde::Serialize;
use tracing::{error, info, info_span, Instrument};

use super::error::{map_err, ErrorKind};
use super::form::{ARTICLE_ID_FIELD, NEW_IMAGE_FIELD, OLD_IMAGE_FIELD};

/// Raw form input, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitRequest {
    pub article_id: String,
    pub old_image: String,
    pub new_image: String,
}

/// Renderable outcome of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmitResponse {
    Summary(ReplacementSummary),
    Error { kind: ErrorKind, message: String },
}

struct ValidatedRequest {
    article_id: ArticleId,
    old_reference: ImageReference,
    new_reference: ImageReference,
}

impl SubmitRequest {
    fn validate(&self) -> Result<ValidatedRequest, SubmitResponse> {
        let required = |value: &str, field: &str| {
            let value = value.trim();
            if value.is_empty() {
                Err(SubmitResponse::Error {
                    kind: ErrorKind::InvalidInput,
                    message: format!("{field} is required"),
                })
            } else {
                Ok(value.to_string())
            }
        };

        Ok(ValidatedRequest {
            article_id: ArticleId::from(required(&self.article_id, ARTICLE_ID_FIELD)?),
            old_reference: ImageReference::from(required(&self.old_image, OLD_IMAGE_FIELD)?),
            new_reference: ImageReference::from(required(&self.new_image, NEW_IMAGE_FIELD)?),
        })
    }
}

impl SubmitResponse {
    /// Process exit status: 0 replaced, 1 nothing replaced, 2 failed.
    pub fn exit_status(&self) -> u8 {
        match self {
            SubmitResponse::Summary(summary) if summary.success => 0,
            SubmitResponse::Summary(_) => 1,
            SubmitResponse::Error { .. } => 2,
        }
    }

    /// Plain-text rendering for terminals.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        match self {
            SubmitResponse::Summary(summary) => {
                let _ = writeln!(out, "{}", summary.message);
                let _ = writeln!(out, "  images found:  {}", summary.images_found);
                let _ = writeln!(out, "  matches found: {}", summary.matches_found);
                let _ = writeln!(out, "  replacements:  {}", summary.replacements);
                for reference in &summary.matched_references {
                    let _ = writeln!(out, "  matched: {reference}");
                }
                for skipped in &summary.skipped_references {
                    let _ = writeln!(out, "  skipped: {} ({})", skipped.reference, skipped.reason);
                }
            }
            SubmitResponse::Error { kind, message } => {
                let _ = writeln!(out, "error [{kind}]: {message}");
            }
        }
        out
    }
}

/// Validate the form input and run one replacement.
/// 校验表单输入并执行一次替换。
///
/// Never fails: every outcome, including use-case errors, becomes a
/// `SubmitResponse`.
pub async fn submit(app: &App, request: SubmitRequest) -> SubmitResponse {
    let span = info_span!(
        "command.submit",
        article_id = %request.article_id.trim(),
    );

    async move {
        let validated = match request.validate() {
            Ok(validated) => validated,
            Err(response) => return response,
        };

        let uc = app.usecases().replace_article_image();
        match uc
            .execute(
                &validated.article_id,
                &validated.old_reference,
                &validated.new_reference,
            )
            .await
        {
            Ok(summary) => {
                info!(
                    success = summary.success,
                    replacements = summary.replacements,
                    "Submission finished"
                );
                SubmitResponse::Summary(summary)
            }
            Err(e) => {
                error!(error = %e, "Submission failed");
                map_err(e)
            }
        }
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rl_app::{AppDeps, MatchingOptions};
    use rl_core::ports::{
        ArticleStorePort, ContentStoreError, EquivalenceOraclePort, ImageFetcherPort,
        RetrievalError,
    };
    use rl_core::{Article, ImageAsset, MediaType};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct MemoryStore {
        articles: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl ArticleStorePort for MemoryStore {
        async fn get_article(&self, id: &ArticleId) -> Result<Article, ContentStoreError> {
            let articles = self.articles.lock().unwrap();
            articles
                .get(id.as_str())
                .map(|body| Article::new(id.clone(), body.clone()))
                .ok_or_else(|| ContentStoreError::NotFound(id.clone()))
        }

        async fn update_article(&self, id: &ArticleId, body: &str) -> Result<(), ContentStoreError> {
            self.articles
                .lock()
                .unwrap()
                .insert(id.to_string(), body.to_string());
            Ok(())
        }
    }

    /// Every reference resolves to its own URL text as payload.
    struct EchoFetcher;

    #[async_trait]
    impl ImageFetcherPort for EchoFetcher {
        async fn fetch(&self, reference: &ImageReference) -> Result<ImageAsset, RetrievalError> {
            Ok(ImageAsset::from_bytes(
                reference.as_bytes(),
                MediaType::default(),
            ))
        }
    }

    /// `https://cdn/old.png` and `https://mirror/old.png` depict the same image.
    struct SameFileNameOracle;

    #[async_trait]
    impl EquivalenceOraclePort for SameFileNameOracle {
        async fn compare(&self, a: &ImageAsset, b: &ImageAsset) -> bool {
            let file_name = |asset: &ImageAsset| {
                let bytes = asset.decode().unwrap_or_default();
                let url = String::from_utf8_lossy(&bytes).into_owned();
                url.rsplit('/').next().unwrap_or_default().to_string()
            };
            file_name(a) == file_name(b)
        }
    }

    fn app_with(store: Arc<MemoryStore>) -> App {
        App::new(
            AppDeps {
                article_store: store,
                image_fetcher: Arc::new(EchoFetcher),
                oracle: Arc::new(SameFileNameOracle),
            },
            MatchingOptions::default(),
        )
    }

    fn request(article_id: &str, old_image: &str, new_image: &str) -> SubmitRequest {
        SubmitRequest {
            article_id: article_id.to_string(),
            old_image: old_image.to_string(),
            new_image: new_image.to_string(),
        }
    }

    #[tokio::test]
    async fn submit_rewrites_matching_images() {
        let store = Arc::new(MemoryStore::default());
        store.articles.lock().unwrap().insert(
            "42".to_string(),
            r#"<img src="https://mirror/old.png"><img src="https://cdn/other.png">"#.to_string(),
        );

        let response = submit(
            &app_with(store.clone()),
            request(" 42 ", "https://cdn/old.png", "https://cdn/new.png"),
        )
        .await;

        match &response {
            SubmitResponse::Summary(summary) => {
                assert!(summary.success);
                assert_eq!(summary.images_found, 2);
                assert_eq!(summary.matches_found, 1);
                assert_eq!(summary.replacements, 1);
            }
            other => panic!("unexpected response: {other:?}"),
        }
        assert_eq!(response.exit_status(), 0);
        assert_eq!(
            store.articles.lock().unwrap()["42"],
            r#"<img src="https://cdn/new.png"><img src="https://cdn/other.png">"#
        );
    }

    #[tokio::test]
    async fn submit_rejects_blank_input_before_any_call() {
        let store = Arc::new(MemoryStore::default());

        let response = submit(
            &app_with(store),
            request("42", "https://cdn/old.png", "   "),
        )
        .await;

        assert_eq!(
            response,
            SubmitResponse::Error {
                kind: ErrorKind::InvalidInput,
                message: "new_image is required".to_string(),
            }
        );
        assert_eq!(response.exit_status(), 2);
    }

    #[tokio::test]
    async fn submit_turns_missing_article_into_error_response() {
        let response = submit(
            &app_with(Arc::new(MemoryStore::default())),
            request("missing", "https://cdn/old.png", "https://cdn/new.png"),
        )
        .await;

        assert!(matches!(
            response,
            SubmitResponse::Error {
                kind: ErrorKind::ArticleNotFound,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn submit_without_images_reports_nothing_found() {
        let store = Arc::new(MemoryStore::default());
        store
            .articles
            .lock()
            .unwrap()
            .insert("7".to_string(), "<p>text only</p>".to_string());

        let response = submit(
            &app_with(store),
            request("7", "https://cdn/old.png", "https://cdn/new.png"),
        )
        .await;

        assert_eq!(
            response,
            SubmitResponse::Summary(ReplacementSummary::nothing_found())
        );
        assert_eq!(response.exit_status(), 1);
    }

    #[test]
    fn test_response_renders_as_tagged_json_and_text() {
        let response = SubmitResponse::Summary(ReplacementSummary::nothing_found());

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "summary");
        assert_eq!(value["imagesFound"], 0);
        assert!(response.to_text().starts_with("No images found in the article."));

        let error = SubmitResponse::Error {
            kind: ErrorKind::Persist,
            message: "article 42 could not be saved".to_string(),
        };
        assert_eq!(serde_json::to_value(&error).unwrap()["kind"], "persist");
        assert_eq!(
            error.to_text(),
            "error [persist]: article 42 could not be saved\n"
        );
    }
}
