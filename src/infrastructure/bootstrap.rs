//! Composition root for the bot process.

use std::sync::Arc;

use tracing::info;

use crate::adapter::inbound::telegram::{BotControl, DisplayLimits, TelegramBot};
use crate::adapter::outbound::preference::InMemoryPreferences;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::{build_service, telegram_token};

/// Wire every component from `config` into a bot control.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn build_control(config: &Config) -> Result<BotControl> {
    let service = Arc::new(build_service(config)?);
    Ok(BotControl::with_limits(
        service,
        Arc::new(InMemoryPreferences::new()),
        DisplayLimits::from(&config.telegram),
    ))
}

/// Run the bot until Ctrl-C.
///
/// # Errors
///
/// Returns an error if `TELEGRAM_BOT_TOKEN` is missing or wiring fails.
pub async fn run(config: Config) -> Result<()> {
    let token = telegram_token().ok_or(ConfigError::MissingField {
        field: "TELEGRAM_BOT_TOKEN",
    })?;
    let control = build_control(&config)?;

    info!(
        feed = ?config.feed.source,
        analysis = control.analysis_enabled(),
        "Starting kickoff bot"
    );
    TelegramBot::new(&token, control, config.telegram).run().await;
    info!("kickoff bot stopped");
    Ok(())
}
