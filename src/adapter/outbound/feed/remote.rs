//! HTTP fixture feed with a built-in fallback.
//!
//! Fetches a JSON array of fixtures from a configured URL. Any failure,
//! after the client's own retries, degrades to the fallback feed so users
//! always get a card.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::adapter::outbound::http::RetryingClient;
use crate::domain::{Fixture, League, StandingRow};
use crate::error::Result;
use crate::port::outbound::feed::MatchFeed;

/// Feed reading fixtures from a JSON endpoint.
pub struct RemoteFeed {
    client: RetryingClient,
    url: String,
    fallback: Arc<dyn MatchFeed>,
}

impl RemoteFeed {
    pub fn new(
        client: RetryingClient,
        url: impl Into<String>,
        fallback: Arc<dyn MatchFeed>,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            fallback,
        }
    }
}

#[async_trait]
impl MatchFeed for RemoteFeed {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn fixtures(&self) -> Result<Vec<Fixture>> {
        match self.client.get_json::<Vec<Fixture>>(&self.url).await {
            Ok(fixtures) if !fixtures.is_empty() => {
                info!(count = fixtures.len(), url = %self.url, "Fetched fixtures");
                Ok(fixtures)
            }
            Ok(_) => {
                warn!(
                    url = %self.url,
                    fallback = self.fallback.name(),
                    "Remote feed returned no fixtures, using fallback"
                );
                self.fallback.fixtures().await
            }
            Err(e) => {
                warn!(
                    url = %self.url,
                    fallback = self.fallback.name(),
                    error = %e,
                    "Remote feed unavailable, using fallback"
                );
                self.fallback.fixtures().await
            }
        }
    }

    async fn standings(&self, league: League) -> Result<Vec<StandingRow>> {
        self.fallback.standings(league).await
    }
}
