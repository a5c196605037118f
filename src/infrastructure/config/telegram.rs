//! Telegram bot configuration.
//!
//! The bot token itself is read from `TELEGRAM_BOT_TOKEN` and never from the
//! config file.

use serde::Deserialize;

const fn default_true() -> bool {
    true
}

/// Telegram bot configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Chats allowed to talk to the bot. Empty allows every chat.
    #[serde(default)]
    pub allowed_chats: Vec<i64>,
    /// Leagues shown by /matches (default: 5).
    #[serde(default = "default_max_leagues")]
    pub max_leagues: usize,
    /// Matches shown per league by /matches (default: 3).
    #[serde(default = "default_matches_per_league")]
    pub matches_per_league: usize,
    /// Prediction cards sent by /probabilities (default: 5).
    #[serde(default = "default_prediction_limit")]
    pub prediction_limit: usize,
    /// Pause between consecutive messages of one reply, in milliseconds (default: 500).
    #[serde(default = "default_message_delay_ms")]
    pub message_delay_ms: u64,
    /// Register the command menu with Telegram on startup.
    #[serde(default = "default_true")]
    pub register_commands: bool,
}

const fn default_max_leagues() -> usize {
    5
}

const fn default_matches_per_league() -> usize {
    3
}

const fn default_prediction_limit() -> usize {
    5
}

const fn default_message_delay_ms() -> u64 {
    500
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            allowed_chats: Vec::new(),
            max_leagues: default_max_leagues(),
            matches_per_league: default_matches_per_league(),
            prediction_limit: default_prediction_limit(),
            message_delay_ms: default_message_delay_ms(),
            register_commands: default_true(),
        }
    }
}
