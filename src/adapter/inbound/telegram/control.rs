//! Telegram command execution against the football service.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::FootballService;
use crate::infrastructure::config::telegram::TelegramAppConfig;
use crate::port::outbound::preference::PreferenceStore;

mod dispatch;

/// One outgoing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// `MarkdownV2` text, already escaped.
    Markdown(String),
    /// Plain text, sent without a parse mode.
    Plain(String),
    /// `MarkdownV2` text with the league keyboard attached.
    LeaguePicker(String),
}

impl Reply {
    /// Message body regardless of kind.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Markdown(text) | Self::Plain(text) | Self::LeaguePicker(text) => text,
        }
    }
}

/// The Telegram user behind a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserContext {
    pub id: u64,
    pub first_name: String,
}

impl UserContext {
    pub fn new(id: u64, first_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
        }
    }
}

/// How much of a reply to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLimits {
    pub max_leagues: usize,
    pub matches_per_league: usize,
    pub prediction_limit: usize,
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self::from(&TelegramAppConfig::default())
    }
}

impl From<&TelegramAppConfig> for DisplayLimits {
    fn from(config: &TelegramAppConfig) -> Self {
        Self {
            max_leagues: config.max_leagues,
            matches_per_league: config.matches_per_league,
            prediction_limit: config.prediction_limit,
        }
    }
}

/// Command executor shared by every handler invocation.
#[derive(Clone)]
pub struct BotControl {
    service: Arc<FootballService>,
    preferences: Arc<dyn PreferenceStore>,
    limits: DisplayLimits,
    started_at: DateTime<Utc>,
}

impl BotControl {
    #[must_use]
    pub fn new(service: Arc<FootballService>, preferences: Arc<dyn PreferenceStore>) -> Self {
        Self::with_limits(service, preferences, DisplayLimits::default())
    }

    #[must_use]
    pub fn with_limits(
        service: Arc<FootballService>,
        preferences: Arc<dyn PreferenceStore>,
        limits: DisplayLimits,
    ) -> Self {
        Self {
            service,
            preferences,
            limits,
            started_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn analysis_enabled(&self) -> bool {
        self.service.analysis_enabled()
    }
}
