//! Match data port.
//!
//! Defines where fixtures and league tables come from. Implementations may
//! serve a static card or fetch one over HTTP.

use async_trait::async_trait;

use crate::domain::{Fixture, League, StandingRow};
use crate::error::Result;

/// Source of today's fixtures and league tables.
#[async_trait]
pub trait MatchFeed: Send + Sync {
    /// Return the feed name for logging.
    fn name(&self) -> &'static str;

    /// Today's fixtures, in feed order.
    ///
    /// # Errors
    ///
    /// Returns an error if the feed cannot be read.
    async fn fixtures(&self) -> Result<Vec<Fixture>>;

    /// Current table for a league. Empty when the feed has no table for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the feed cannot be read.
    async fn standings(&self, league: League) -> Result<Vec<StandingRow>>;
}
