//! LLM provider configuration.
//!
//! Provides configuration for the Large Language Model providers used to
//! answer free-text analysis questions.

use serde::Deserialize;

/// LLM provider configuration.
///
/// Configures which LLM provider to use and provider-specific settings.
/// API keys are read from environment variables (`ANTHROPIC_API_KEY` or
/// `OPENAI_API_KEY`) at runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// Enable the analysis pass-through. Defaults to false.
    #[serde(default)]
    pub enabled: bool,

    /// LLM provider to use for analysis.
    ///
    /// Defaults to OpenAI.
    #[serde(default)]
    pub provider: LlmProvider,

    /// Longest accepted question, in characters (default: 500).
    #[serde(default = "default_max_question_chars")]
    pub max_question_chars: usize,

    /// Anthropic-specific settings.
    ///
    /// Used when `provider` is set to `anthropic`.
    #[serde(default)]
    pub anthropic: AnthropicConfig,

    /// OpenAI-specific settings.
    ///
    /// Used when `provider` is set to `openai`.
    #[serde(default)]
    pub openai: OpenAiConfig,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: LlmProvider::default(),
            max_question_chars: default_max_question_chars(),
            anthropic: AnthropicConfig::default(),
            openai: OpenAiConfig::default(),
        }
    }
}

/// LLM provider selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    /// Anthropic Claude models.
    Anthropic,
    /// OpenAI GPT models.
    #[default]
    OpenAi,
}

/// Anthropic-specific configuration.
///
/// Settings for Anthropic Claude API. Requires `ANTHROPIC_API_KEY`
/// environment variable.
#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicConfig {
    /// Model identifier.
    ///
    /// Defaults to "claude-3-5-sonnet-20241022".
    #[serde(default = "default_anthropic_model")]
    pub model: String,

    /// Sampling temperature for generation.
    ///
    /// Defaults to 0.7; analysis is conversational rather than structured.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Maximum tokens in the response.
    ///
    /// Defaults to 1024, which keeps answers inside one Telegram message.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            model: default_anthropic_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// OpenAI-specific configuration.
///
/// Settings for OpenAI API. Requires `OPENAI_API_KEY` environment variable.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    /// Model identifier.
    ///
    /// Defaults to "gpt-4o-mini".
    #[serde(default = "default_openai_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            model: default_openai_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_anthropic_model() -> String {
    "claude-3-5-sonnet-20241022".into()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".into()
}

fn default_temperature() -> f64 {
    0.7
}

const fn default_max_tokens() -> usize {
    1024
}

const fn default_max_question_chars() -> usize {
    500
}
