//! LLM client factory.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::outbound::http::RetryingClient;
use crate::adapter::outbound::llm::{Anthropic, OpenAi};
use crate::infrastructure::config::llm::LlmProvider;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::llm::Llm;

/// Build LLM client from configuration and the process environment.
///
/// Returns `None` if analysis is disabled or required API keys are missing.
pub fn build_llm_client(config: &Config, client: &RetryingClient) -> Option<Arc<dyn Llm>> {
    build_llm_client_with(config, client, |name| std::env::var(name).ok())
}

/// Build LLM client, resolving API keys through `env`.
pub fn build_llm_client_with(
    config: &Config,
    client: &RetryingClient,
    env: impl Fn(&str) -> Option<String>,
) -> Option<Arc<dyn Llm>> {
    if !config.llm.enabled {
        return None;
    }

    let key_var = match config.llm.provider {
        LlmProvider::Anthropic => "ANTHROPIC_API_KEY",
        LlmProvider::OpenAi => "OPENAI_API_KEY",
    };
    let Some(api_key) = env(key_var).filter(|key| !key.trim().is_empty()) else {
        warn!(variable = key_var, "API key not set, analysis disabled");
        return None;
    };

    let llm: Arc<dyn Llm> = match config.llm.provider {
        LlmProvider::Anthropic => Arc::new(Anthropic::new(
            client.clone(),
            api_key,
            &config.llm.anthropic.model,
            config.llm.anthropic.max_tokens,
            config.llm.anthropic.temperature,
        )),
        LlmProvider::OpenAi => Arc::new(OpenAi::new(
            client.clone(),
            api_key,
            &config.llm.openai.model,
            config.llm.openai.max_tokens,
            config.llm.openai.temperature,
        )),
    };

    info!(provider = llm.name(), "LLM client initialized");
    Some(llm)
}
