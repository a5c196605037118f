//! Outbound HTTP client configuration.

use serde::Deserialize;

/// Retry schedule for outbound requests.
///
/// The delay before retry `k` (zero-based) is
/// `initial_delay_ms * backoff_multiplier^k`.
#[derive(Debug, Clone, Deserialize)]
pub struct RetryConfig {
    /// Total attempts, including the first (default: 3).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Delay before the first retry in milliseconds (default: 1000).
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
    /// Multiplier applied to the delay after each failed attempt (default: 2.0).
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,
}

const fn default_max_attempts() -> u32 {
    3
}

const fn default_initial_delay_ms() -> u64 {
    1000
}

fn default_backoff_multiplier() -> f64 {
    2.0
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            initial_delay_ms: default_initial_delay_ms(),
            backoff_multiplier: default_backoff_multiplier(),
        }
    }
}

/// HTTP client configuration shared by the feed and LLM adapters.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub retry: RetryConfig,
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("kickoff/", env!("CARGO_PKG_VERSION")).into()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            retry: RetryConfig::default(),
        }
    }
}
