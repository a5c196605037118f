//! Match-related domain types.
//!
//! - [`Fixture`] - A single match on today's card
//! - [`MatchStatus`] - Where the match is in its lifecycle
//! - [`Odds`] - Decimal 1X2 prices for a match

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Live,
    Finished,
}

/// Decimal 1X2 odds.
///
/// Each price is the multiplicative payout for a unit stake on that outcome,
/// so the raw implied probability of an outcome is `1 / price`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Odds {
    pub home: Decimal,
    pub draw: Decimal,
    pub away: Decimal,
}

impl Odds {
    #[must_use]
    pub const fn new(home: Decimal, draw: Decimal, away: Decimal) -> Self {
        Self { home, draw, away }
    }
}

/// A single match.
///
/// `league` is kept as free text so feeds can carry competitions outside
/// the selectable [`League`](super::league::League) set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub home_team: String,
    pub away_team: String,
    pub league: String,
    /// Local kickoff time, `HH:MM`.
    pub kickoff: String,
    #[serde(default)]
    pub status: MatchStatus,
    #[serde(default)]
    pub score: Option<String>,
    #[serde(default)]
    pub odds: Option<Odds>,
}

impl Fixture {
    /// Create a scheduled fixture without score.
    pub fn scheduled(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        league: impl Into<String>,
        kickoff: impl Into<String>,
        odds: Option<Odds>,
    ) -> Self {
        Self {
            home_team: home_team.into(),
            away_team: away_team.into(),
            league: league.into(),
            kickoff: kickoff.into(),
            status: MatchStatus::Scheduled,
            score: None,
            odds,
        }
    }

    /// `"Home vs Away"`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }
}
