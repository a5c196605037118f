//! Selectable leagues.

use std::fmt;
use std::str::FromStr;

use super::error::DomainError;

/// A league users can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum League {
    PremierLeague,
    LaLiga,
    SerieA,
    Bundesliga,
    Ligue1,
    Brasileirao,
    ChampionsLeague,
    EuropaLeague,
}

impl League {
    /// Every selectable league, in keyboard order.
    pub const ALL: [League; 8] = [
        League::PremierLeague,
        League::LaLiga,
        League::SerieA,
        League::Bundesliga,
        League::Ligue1,
        League::Brasileirao,
        League::ChampionsLeague,
        League::EuropaLeague,
    ];

    /// Display name, as carried by [`Fixture::league`](super::fixture::Fixture).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            League::PremierLeague => "Premier League",
            League::LaLiga => "LaLiga",
            League::SerieA => "Serie A",
            League::Bundesliga => "Bundesliga",
            League::Ligue1 => "Ligue 1",
            League::Brasileirao => "Campeonato Brasileiro",
            League::ChampionsLeague => "Champions League",
            League::EuropaLeague => "Europa League",
        }
    }

    /// Stable identifier used in callback data and command arguments.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            League::PremierLeague => "premier",
            League::LaLiga => "laliga",
            League::SerieA => "seriea",
            League::Bundesliga => "bundesliga",
            League::Ligue1 => "ligue1",
            League::Brasileirao => "brasileirao",
            League::ChampionsLeague => "ucl",
            League::EuropaLeague => "uel",
        }
    }

    /// Resolve a slug or display name, ignoring case, spaces and underscores.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let key = normalize(value);
        if key.is_empty() {
            return Err(DomainError::UnknownLeague(value.to_string()));
        }

        League::ALL
            .into_iter()
            .find(|league| key == league.slug() || key == normalize(league.name()))
            .ok_or_else(|| DomainError::UnknownLeague(value.to_string()))
    }

    /// True when a fixture's free-text league names this league.
    #[must_use]
    pub fn matches(self, league_name: &str) -> bool {
        normalize(league_name) == normalize(self.name())
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for League {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        League::parse(s)
    }
}

fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}
