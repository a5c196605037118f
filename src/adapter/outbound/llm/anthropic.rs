//! Anthropic Claude LLM client.
//!
//! Provides an implementation of the [`Llm`] trait for the Anthropic
//! Messages API.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::adapter::outbound::http::RetryingClient;
use crate::error::{ConfigError, Error, Result};
use crate::port::outbound::llm::Llm;

/// Anthropic Messages API endpoint.
const API_URL: &str = "https://api.anthropic.com/v1/messages";

/// API version header value.
const API_VERSION: &str = "2023-06-01";

/// Anthropic Claude API client.
#[derive(Debug)]
pub struct Anthropic {
    client: RetryingClient,
    api_key: String,
    model: String,
    max_tokens: usize,
    /// Sampling temperature (0.0 to 1.0).
    temperature: f64,
}

impl Anthropic {
    /// Create a new Anthropic client with explicit configuration.
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
        let key = HeaderValue::from_str(&self.api_key).map_err(|_| ConfigError::InvalidValue {
            field: "ANTHROPIC_API_KEY",
            reason: "contains characters not allowed in a header".to_string(),
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static("x-api-key"), key);
        headers.insert(
            HeaderName::from_static("anthropic-version"),
            HeaderValue::from_static(API_VERSION),
        );
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
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

impl Response {
    fn into_text(self) -> Result<String> {
        let text = self
            .content
            .into_iter()
            .map(|c| c.text)
            .collect::<Vec<_>>()
            .join("");
        if text.trim().is_empty() {
            return Err(Error::Connection(
                "Anthropic returned an empty completion".to_string(),
            ));
        }
        Ok(text)
    }
}

#[async_trait]
impl Llm for Anthropic {
    fn name(&self) -> &'static str {
        "anthropic"
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
