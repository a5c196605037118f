//! Per-user league preferences.

use crate::domain::League;

/// Storage for the leagues each user follows.
///
/// Users are keyed by their Telegram user id.
pub trait PreferenceStore: Send + Sync {
    /// Add a league. Returns `false` if the user already follows it.
    fn add(&self, user: u64, league: League) -> bool;

    /// Leagues the user follows, in the order they were added.
    fn leagues(&self, user: u64) -> Vec<League>;

    /// Forget every league the user follows. Returns how many were removed.
    fn clear(&self, user: u64) -> usize;
}
