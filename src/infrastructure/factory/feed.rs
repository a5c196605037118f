//! Match feed factory.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::feed::{RemoteFeed, SimulatedFeed};
use crate::adapter::outbound::http::RetryingClient;
use crate::infrastructure::config::feed::FeedSource;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::feed::MatchFeed;

/// Build the configured match feed. A remote feed falls back to the simulated card.
pub fn build_feed(config: &Config, client: &RetryingClient) -> Arc<dyn MatchFeed> {
    let simulated: Arc<dyn MatchFeed> = Arc::new(SimulatedFeed::new());

    let feed = match (&config.feed.source, config.feed.url.as_deref()) {
        (FeedSource::Remote, Some(url)) => {
            Arc::new(RemoteFeed::new(client.clone(), url, simulated)) as Arc<dyn MatchFeed>
        }
        _ => simulated,
    };

    info!(feed = feed.name(), "Match feed initialized");
    feed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::http::HttpConfig;

    #[test]
    fn defaults_to_simulated() {
        let client = RetryingClient::new(&HttpConfig::default()).unwrap();
        assert_eq!(build_feed(&Config::default(), &client).name(), "simulated");
    }

    #[test]
    fn remote_source_builds_remote_feed() {
        let config =
            Config::parse_toml("[feed]\nsource = \"remote\"\nurl = \"http://127.0.0.1:9/today.json\"\n")
                .unwrap();
        let client = RetryingClient::new(&config.http).unwrap();
        assert_eq!(build_feed(&config, &client).name(), "remote");
    }
}
