//! Chat-completions wire format (OpenAI-compatible subset).

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(super) struct ChatRequest<'a> {
    pub model: &'a str,
    pub temperature: f32,
    pub max_tokens: u32,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub(super) struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: Vec<ContentPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(super) enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
pub(super) struct ImageUrl {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Choice {
    pub message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
pub(super) struct AssistantMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice, if any.
    pub fn into_answer(self) -> Option<String> {
        self.choices.into_iter().next()?.message.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_tagged_content_parts() {
        let request = ChatRequest {
            model: "vision-1",
            temperature: 0.0,
            max_tokens: 5,
            messages: vec![ChatMessage {
                role: "user",
                content: vec![
                    ContentPart::Text { text: "compare" },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: "data:image/png;base64,AA==".to_string(),
                        },
                    },
                ],
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "vision-1",
                "temperature": 0.0,
                "max_tokens": 5,
                "messages": [{
                    "role": "user",
                    "content": [
                        { "type": "text", "text": "compare" },
                        { "type": "image_url", "image_url": { "url": "data:image/png;base64,AA==" } }
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_response_answer_is_first_choice() {
        let response: ChatResponse = serde_json::from_value(json!({
            "id": "cmpl-1",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "YES" } },
                { "index": 1, "message": { "role": "assistant", "content": "NO" } }
            ]
        }))
        .unwrap();

        assert_eq!(response.into_answer().as_deref(), Some("YES"));
    }

    #[test]
    fn test_response_without_choices_has_no_answer() {
        let response: ChatResponse = serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert_eq!(response.into_answer(), None);

        let response: ChatResponse = serde_json::from_value(json!({ "object": "error" })).unwrap();
        assert_eq!(response.into_answer(), None);
    }
}
