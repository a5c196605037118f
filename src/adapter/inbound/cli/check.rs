//! Handlers for `kickoff check`.

use std::path::Path;

use serde_json::json;
use teloxide::prelude::*;

use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::http::RetryingClient;
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::config::feed::FeedSource;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::{build_llm_client, mask_token, telegram_token};

const LLM_TEST_PROMPT: &str = "Reply with the single word: ok";

/// Validate configuration file without starting the bot.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    let config = Config::load(path)?;
    let token_present = telegram_token().is_some();

    if output::is_json() {
        output::json_output(json!({
            "command": "check.config",
            "config": path.display().to_string(),
            "feed": format!("{:?}", config.feed.source).to_lowercase(),
            "llm_enabled": config.llm.enabled,
            "allowed_chats": config.telegram.allowed_chats,
            "telegram_token_present": token_present,
            "valid": true,
        }));
        return Ok(());
    }

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");

    output::section("Summary");
    match config.feed.source {
        FeedSource::Simulated => output::field("Feed", "simulated"),
        FeedSource::Remote => output::field(
            "Feed",
            format!("remote ({})", config.feed.url.as_deref().unwrap_or_default()),
        ),
    }
    output::field("Timeout", format!("{}s", config.http.timeout_secs));
    output::field("Retries", config.http.retry.max_attempts);
    output::field("Predictions", config.telegram.prediction_limit);

    if config.llm.enabled {
        output::field("Analysis", format!("{:?}", config.llm.provider).to_lowercase());
    } else {
        output::field("Analysis", "disabled");
    }

    if token_present {
        output::success("TELEGRAM_BOT_TOKEN detected");
    } else {
        output::warning("TELEGRAM_BOT_TOKEN not set (required for `kickoff run`)");
    }

    output::success("Configuration check complete");
    Ok(())
}

/// Verify the bot token by asking Telegram who we are.
pub async fn execute_telegram<P: AsRef<Path>>(config_path: P) -> Result<()> {
    Config::load(config_path.as_ref())?.init_logging();
    let token = telegram_token().ok_or(ConfigError::MissingField {
        field: "TELEGRAM_BOT_TOKEN",
    })?;

    let me = Bot::new(&token).get_me().await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "check.telegram",
            "masked_token": mask_token(&token),
            "username": me.username(),
            "status": "ok",
        }));
        return Ok(());
    }

    output::section("Telegram Check");
    output::field("Bot token", mask_token(&token));
    output::field("Bot", output::highlight(format!("@{}", me.username())));
    output::success("Telegram API reachable");
    output::hint("send /start to the bot to try it");
    Ok(())
}

/// Send a short prompt to the configured LLM provider.
pub async fn execute_llm<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path.as_ref())?;
    config.init_logging();
    let client = RetryingClient::new(&config.http)?;
    let llm = build_llm_client(&config, &client).ok_or(Error::AnalysisDisabled)?;

    let answer = llm.complete(LLM_TEST_PROMPT).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "check.llm",
            "provider": llm.name(),
            "response": answer.trim(),
            "status": "ok",
        }));
        return Ok(());
    }

    output::section("LLM Check");
    output::field("Provider", llm.name());
    output::field("Response", answer.trim());
    output::success("LLM provider reachable");
    Ok(())
}
