//! Component factory functions.
//!
//! Turn configuration into the adapters behind each outbound port.

mod feed;
mod llm;

pub use feed::build_feed;
pub use llm::{build_llm_client, build_llm_client_with};

use crate::adapter::outbound::http::RetryingClient;
use crate::application::FootballService;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Build the football service with its feed and, when available, an LLM.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn build_service(config: &Config) -> Result<FootballService> {
    let client = RetryingClient::new(&config.http)?;
    let service = FootballService::new(build_feed(config, &client));

    Ok(match build_llm_client(config, &client) {
        Some(llm) => service.with_llm(llm, config.llm.max_question_chars),
        None => service,
    })
}

/// Read the bot token from the environment.
#[must_use]
pub fn telegram_token() -> Option<String> {
    std::env::var("TELEGRAM_BOT_TOKEN")
        .ok()
        .filter(|token| !token.trim().is_empty())
}

/// `123456:ABCDEF...` shown as `123456:****`.
#[must_use]
pub fn mask_token(token: &str) -> String {
    match token.split_once(':') {
        Some((id, _)) => format!("{id}:****"),
        None => "****".to_string(),
    }
}
