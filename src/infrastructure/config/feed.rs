//! Match feed configuration.

use serde::Deserialize;

/// Where fixtures come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedSource {
    /// Built-in demonstration card.
    #[default]
    Simulated,
    /// JSON fixture list served over HTTP, with the simulated card as fallback.
    Remote,
}

/// Match feed configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedConfig {
    #[serde(default)]
    pub source: FeedSource,
    /// Fixture list URL. Required when `source = "remote"`.
    #[serde(default)]
    pub url: Option<String>,
}
