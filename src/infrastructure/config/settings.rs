//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application
//! settings. Configuration is loaded from a TOML file; every section is
//! optional. Secrets such as `TELEGRAM_BOT_TOKEN` and the LLM API keys are
//! only ever read from the environment.
//!
//! # Example
//!
//! ```no_run
//! use kickoff::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::feed::{FeedConfig, FeedSource};
use super::http::HttpConfig;
use super::llm::LlmConfig;
use super::logging::LoggingConfig;
use super::telegram::TelegramAppConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Telegram bot behaviour.
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// Match feed selection.
    #[serde(default)]
    pub feed: FeedConfig,

    /// Outbound HTTP timeout and retry schedule.
    #[serde(default)]
    pub http: HttpConfig,

    /// LLM provider configuration for analysis.
    #[serde(default)]
    pub llm: LlmConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Initialize tracing from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.feed.source == FeedSource::Remote {
            let url = self
                .feed
                .url
                .as_deref()
                .filter(|u| !u.trim().is_empty())
                .ok_or(ConfigError::MissingField { field: "feed.url" })?;
            url::Url::parse(url).map_err(|e| ConfigError::InvalidValue {
                field: "feed.url",
                reason: e.to_string(),
            })?;
        }

        let retry = &self.http.retry;
        if retry.max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_attempts",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !retry.backoff_multiplier.is_finite() || retry.backoff_multiplier < 1.0 {
            return Err(ConfigError::InvalidValue {
                field: "backoff_multiplier",
                reason: "must be a finite number >= 1.0".to_string(),
            }
            .into());
        }
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        let telegram = &self.telegram;
        for (field, value) in [
            ("max_leagues", telegram.max_leagues),
            ("matches_per_league", telegram.matches_per_league),
            ("prediction_limit", telegram.prediction_limit),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be greater than 0".to_string(),
                }
                .into());
            }
        }

        if self.llm.enabled && self.llm.max_question_chars == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_question_chars",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::infrastructure::config::llm::LlmProvider;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.feed.source, FeedSource::Simulated);
        assert_eq!(config.http.timeout_secs, 10);
        assert_eq!(config.http.retry.max_attempts, 3);
        assert_eq!(config.http.retry.initial_delay_ms, 1000);
        assert_eq!(config.telegram.max_leagues, 5);
        assert_eq!(config.telegram.matches_per_league, 3);
        assert_eq!(config.telegram.prediction_limit, 5);
        assert_eq!(config.telegram.message_delay_ms, 500);
        assert!(config.telegram.allowed_chats.is_empty());
        assert!(!config.llm.enabled);
        assert_eq!(config.llm.provider, LlmProvider::OpenAi);
    }

    #[test]
    fn parses_full_file() {
        let toml = r#"
[logging]
level = "debug"
format = "json"

[telegram]
allowed_chats = [42, -100123]
prediction_limit = 3
message_delay_ms = 0

[feed]
source = "remote"
url = "https://feeds.example.com/today.json"

[http]
timeout_secs = 5

[http.retry]
max_attempts = 4
initial_delay_ms = 250

[llm]
enabled = true
provider = "anthropic"

[llm.anthropic]
model = "claude-test"
"#;
        let config = Config::parse_toml(toml).unwrap();
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.telegram.allowed_chats, vec![42, -100123]);
        assert_eq!(config.telegram.prediction_limit, 3);
        assert_eq!(config.feed.source, FeedSource::Remote);
        assert_eq!(config.http.retry.max_attempts, 4);
        assert_eq!(config.http.retry.backoff_multiplier, 2.0);
        assert_eq!(config.llm.provider, LlmProvider::Anthropic);
        assert_eq!(config.llm.anthropic.model, "claude-test");
    }

    #[test]
    fn remote_feed_requires_url() {
        let result = Config::parse_toml("[feed]\nsource = \"remote\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "feed.url" }))
        ));
    }

    #[test]
    fn remote_feed_rejects_bad_url() {
        let result = Config::parse_toml("[feed]\nsource = \"remote\"\nurl = \"not a url\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "feed.url",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_zero_attempts() {
        let result = Config::parse_toml("[http.retry]\nmax_attempts = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "max_attempts",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_shrinking_backoff() {
        let result = Config::parse_toml("[http.retry]\nbackoff_multiplier = 0.5\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "backoff_multiplier",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_non_finite_backoff() {
        for value in ["nan", "inf", "+inf"] {
            let result =
                Config::parse_toml(&format!("[http.retry]\nbackoff_multiplier = {value}\n"));
            assert!(
                matches!(
                    result,
                    Err(Error::Config(ConfigError::InvalidValue {
                        field: "backoff_multiplier",
                        ..
                    }))
                ),
                "{value} was accepted"
            );
        }
    }

    #[test]
    fn rejects_zero_display_limits() {
        let result = Config::parse_toml("[telegram]\nmatches_per_league = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "matches_per_league",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            Config::parse_toml("[telegram"),
            Err(Error::Config(ConfigError::Parse(_)))
        ));
    }
}
