//! OpenAI LLM client.
//!
//! Provides an implementation of the [`Llm`] trait for the OpenAI
//! Chat Completions API.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::{Deserialize, Serialize};

use crate::adapter::outbound::http::RetryingClient;
use crate::error::{ConfigError, Error, Result};
use crate::port::outbound::llm::Llm;

/// OpenAI Chat Completions API endpoint.
const API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI API client.
#[derive(Debug)]
pub struct OpenAi {
    /// Retrying HTTP client for API requests.
    client: RetryingClient,
    api_key: String,
    /// Model identifier (e.g., "gpt-4o-mini").
    model: String,
    max_tokens: usize,
    /// Sampling temperature (0.0 to 2.0).
    temperature: f64,
}

impl OpenAi {
    /// Create a new OpenAI client with explicit configuration.
    #[must_use]
    pub fn new(
        client: RetryingClient,
        api_key: impl Into<String>,
        model: impl Into<String>,
        max_tokens: usize,
        temperature: f64,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            max_tokens,
            temperature,
        }
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.api_key)).map_err(|_| {
            ConfigError::InvalidValue {
                field: "OPENAI_API_KEY",
                reason: "contains characters not allowed in a header".to_string(),
            }
        })?;
        headers.insert(AUTHORIZATION, bearer);
        Ok(headers)
    }
}

#[derive(Serialize)]
struct Request<'a> {
    model: &'a str,
    max_tokens: usize,
    temperature: f64,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct Response {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl Response {
    fn into_text(self) -> Result<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| Error::Connection("OpenAI returned an empty completion".to_string()))
    }
}

#[async_trait]
impl Llm for OpenAi {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = Request {
            model: &self.model,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let response: Response = self
            .client
            .post_json(API_URL, self.headers()?, &request)
            .await?;
        response.into_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = Request {
            model: "gpt-4o-mini",
            max_tokens: 1024,
            temperature: 0.7,
            messages: vec![Message {
                role: "user",
                content: "Who wins Real Madrid vs Barcelona?",
            }],
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["max_tokens"], 1024);
        assert_eq!(json["temperature"], 0.7);
        assert_eq!(json["messages"].as_array().unwrap().len(), 1);
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn test_response_first_choice_wins() {
        let json = r#"{
            "id": "chatcmpl-456",
            "object": "chat.completion",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "First" }, "finish_reason": "stop" },
                { "index": 1, "message": { "role": "assistant", "content": "Second" }, "finish_reason": "stop" }
            ]
        }"#;

        let response: Response = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_text().unwrap(), "First");
    }

    #[test]
    fn test_empty_choices_is_an_error() {
        let response: Response = serde_json::from_str(r#"{ "choices": [] }"#).unwrap();
        assert!(matches!(response.into_text(), Err(Error::Connection(_))));
    }

    #[test]
    fn test_null_content_is_an_error() {
        let json = r#"{ "choices": [{ "message": { "role": "assistant", "content": null } }] }"#;
        let response: Response = serde_json::from_str(json).unwrap();
        assert!(response.into_text().is_err());
    }

    #[test]
    fn test_malformed_response_missing_choices() {
        let result: std::result::Result<Response, _> =
            serde_json::from_str(r#"{ "id": "chatcmpl-123" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_bearer_header() {
        let client = RetryingClient::new(&Default::default()).unwrap();
        let openai = OpenAi::new(client, "sk-test", "gpt-4o-mini", 100, 0.1);
        let headers = openai.headers().unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer sk-test");
        assert_eq!(openai.name(), "openai");
    }

    #[test]
    fn test_api_url_is_valid() {
        assert!(API_URL.starts_with("https://"));
        assert!(API_URL.contains("/v1/chat/completions"));
    }
}
