//! Scripted LLM for tests.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::port::outbound::llm::Llm;

/// LLM that returns a canned answer and records every prompt.
#[derive(Debug, Clone, Default)]
pub struct MockLlm {
    response: Option<String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockLlm {
    /// Answer every prompt with `response`.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
            prompts: Arc::default(),
        }
    }

    /// Fail every prompt with a connection error.
    #[must_use]
    pub fn failing() -> Self {
        Self::default()
    }

    /// Prompts received so far.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl Llm for MockLlm {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().push(prompt.to_string());
        self.response
            .clone()
            .ok_or_else(|| Error::Connection("mock LLM unavailable".to_string()))
    }
}
