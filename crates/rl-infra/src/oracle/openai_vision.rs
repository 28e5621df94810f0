use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

use rl_core::equivalence::{parse_verdict, EQUIVALENCE_INSTRUCTION};
use rl_core::ports::EquivalenceOraclePort;
use rl_core::ImageAsset;

use super::wire::{ChatMessage, ChatRequest, ChatResponse, ContentPart, ImageUrl};
use crate::http::endpoint;

const MAX_ANSWER_TOKENS: u32 = 5;

/// Reasons an oracle round-trip produced no usable verdict.
///
/// Never crosses the port: `compare` logs it and answers `false`.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("oracle endpoint is invalid: {0}")]
    Endpoint(String),

    #[error("oracle transport error: {0}")]
    Transport(String),

    #[error("oracle responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("oracle response could not be decoded: {0}")]
    Decode(String),

    #[error("oracle response carried no answer")]
    EmptyAnswer,

    #[error("oracle answer is neither yes nor no: {0:?}")]
    Ambiguous(String),
}

/// Equivalence oracle backed by an OpenAI-compatible vision chat endpoint.
/// 基于 OpenAI 兼容视觉模型的图片等价判断。
pub struct OpenAiVisionOracle {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl OpenAiVisionOracle {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.filter(|key| !key.is_empty()),
            model: model.into(),
        }
    }

    /// One chat-completions round-trip, returning the parsed verdict.
    pub async fn judge(&self, a: &ImageAsset, b: &ImageAsset) -> Result<bool, OracleError> {
        let url = endpoint(&self.base_url, &["chat", "completions"])
            .map_err(|err| OracleError::Endpoint(err.to_string()))?;

        let request = ChatRequest {
            model: &self.model,
            temperature: 0.0,
            max_tokens: MAX_ANSWER_TOKENS,
            messages: vec![ChatMessage {
                role: "user",
                content: vec![
                    ContentPart::Text {
                        text: EQUIVALENCE_INSTRUCTION,
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl { url: a.data_url() },
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl { url: b.data_url() },
                    },
                ],
            }],
        };

        let mut builder = self.client.post(url).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| OracleError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OracleError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: ChatResponse = response
            .json()
            .await
            .map_err(|err| OracleError::Decode(err.to_string()))?;
        let answer = payload.into_answer().ok_or(OracleError::EmptyAnswer)?;

        debug!(answer = %answer.trim(), "Oracle answered");
        parse_verdict(&answer).ok_or(OracleError::Ambiguous(answer))
    }
}

#[async_trait]
impl EquivalenceOraclePort for OpenAiVisionOracle {
    async fn compare(&self, a: &ImageAsset, b: &ImageAsset) -> bool {
        match self.judge(a, b).await {
            Ok(verdict) => verdict,
            Err(err) => {
                warn!(error = %err, model = %self.model, "Oracle gave no verdict, treating as no match");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server, ServerGuard};
    use rl_core::MediaType;

    fn assets() -> (ImageAsset, ImageAsset) {
        (
            ImageAsset::from_bytes(b"first", MediaType::from_declared(Some("image/png"))),
            ImageAsset::from_bytes(b"second", MediaType::default()),
        )
    }

    fn oracle(server: &ServerGuard) -> OpenAiVisionOracle {
        OpenAiVisionOracle::new(
            reqwest::Client::new(),
            server.url(),
            Some("sk-test".to_string()),
            "vision-mini",
        )
    }

    async fn answering(server: &mut ServerGuard, content: &str) -> mockito::Mock {
        let body = serde_json::json!({
            "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
        });
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await
    }

    #[tokio::test]
    async fn compare_sends_both_images_and_accepts_yes() {
        let mut server = Server::new_async().await;
        let (a, b) = assets();
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .match_body(Matcher::AllOf(vec![
                Matcher::PartialJson(serde_json::json!({
                    "model": "vision-mini",
                    "max_tokens": 5
                })),
                Matcher::Regex(regex::escape(&a.data_url())),
                Matcher::Regex(regex::escape(&b.data_url())),
            ]))
            .with_status(200)
            .with_body(r#"{"choices":[{"message":{"content":" YES\n"}}]}"#)
            .create_async()
            .await;

        assert!(oracle(&server).compare(&a, &b).await);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn compare_maps_no_to_false() {
        let mut server = Server::new_async().await;
        let _mock = answering(&mut server, "No").await;
        let (a, b) = assets();

        assert!(!oracle(&server).compare(&a, &b).await);
    }

    #[tokio::test]
    async fn judge_reports_ambiguous_answer() {
        let mut server = Server::new_async().await;
        let _mock = answering(&mut server, "Yes, they look alike").await;
        let (a, b) = assets();

        let oracle = oracle(&server);
        let err = oracle.judge(&a, &b).await.unwrap_err();
        assert!(matches!(err, OracleError::Ambiguous(ref text) if text == "Yes, they look alike"));
        assert!(!oracle.compare(&a, &b).await);
    }

    #[tokio::test]
    async fn compare_is_false_on_error_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .with_body("upstream overloaded")
            .create_async()
            .await;
        let (a, b) = assets();

        let oracle = oracle(&server);
        assert!(matches!(
            oracle.judge(&a, &b).await,
            Err(OracleError::Status { status: 500, .. })
        ));
        assert!(!oracle.compare(&a, &b).await);
    }

    #[tokio::test]
    async fn compare_is_false_on_undecodable_response() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body("<html>gateway</html>")
            .create_async()
            .await;
        let (a, b) = assets();
        let oracle = oracle(&server);

        assert!(matches!(
            oracle.judge(&a, &b).await,
            Err(OracleError::Decode(_))
        ));
        assert!(!oracle.compare(&a, &b).await);
    }

    #[tokio::test]
    async fn compare_is_false_without_choices() {
        let mut server = Server::new_async().await;
        let (a, b) = assets();
        let oracle = oracle(&server);
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        assert!(matches!(
            oracle.judge(&a, &b).await,
            Err(OracleError::EmptyAnswer)
        ));
        assert!(!oracle.compare(&a, &b).await);
    }

    #[tokio::test]
    async fn compare_is_false_when_unreachable() {
        let (a, b) = assets();
        let oracle = OpenAiVisionOracle::new(
            reqwest::Client::new(),
            "http://127.0.0.1:9",
            None,
            "vision-mini",
        );

        assert!(matches!(
            oracle.judge(&a, &b).await,
            Err(OracleError::Transport(_))
        ));
        assert!(!oracle.compare(&a, &b).await);
    }
}
