//! Built-in demonstration card.
//!
//! Stands in for a live data source: six fixtures from the big European
//! leagues plus the Brasileirão, and short tables for the Premier League
//! and LaLiga.

use async_trait::async_trait;
use rust_decimal_macros::dec;

use crate::domain::{Fixture, League, Odds, StandingRow};
use crate::error::Result;
use crate::port::outbound::feed::MatchFeed;

/// Feed backed by a static in-memory card.
#[derive(Debug, Clone, Default)]
pub struct SimulatedFeed;

impl SimulatedFeed {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The fixed fixture list.
    #[must_use]
    pub fn card() -> Vec<Fixture> {
        vec![
            Fixture::scheduled(
                "Manchester United",
                "Liverpool",
                League::PremierLeague.name(),
                "15:00",
                Some(Odds::new(dec!(2.10), dec!(3.40), dec!(3.50))),
            ),
            Fixture::scheduled(
                "Real Madrid",
                "Barcelona",
                League::LaLiga.name(),
                "20:00",
                Some(Odds::new(dec!(1.95), dec!(3.60), dec!(3.80))),
            ),
            Fixture::scheduled(
                "Bayern Munich",
                "Borussia Dortmund",
                League::Bundesliga.name(),
                "18:30",
                Some(Odds::new(dec!(1.85), dec!(3.50), dec!(4.20))),
            ),
            Fixture::scheduled(
                "Paris Saint-Germain",
                "Marseille",
                League::Ligue1.name(),
                "19:45",
                Some(Odds::new(dec!(1.70), dec!(3.80), dec!(5.00))),
            ),
            Fixture::scheduled(
                "AC Milan",
                "Inter Milan",
                League::SerieA.name(),
                "20:45",
                Some(Odds::new(dec!(2.30), dec!(3.30), dec!(3.20))),
            ),
            Fixture::scheduled(
                "Flamengo",
                "Palmeiras",
                League::Brasileirao.name(),
                "21:00",
                Some(Odds::new(dec!(2.50), dec!(3.20), dec!(2.80))),
            ),
        ]
    }

    /// The fixed table for a league; empty when none is bundled.
    #[must_use]
    pub fn table(league: League) -> Vec<StandingRow> {
        let rows: &[(&str, u32)] = match league {
            League::PremierLeague => &[
                ("Manchester City", 45),
                ("Liverpool", 42),
                ("Arsenal", 40),
                ("Manchester United", 38),
                ("Chelsea", 35),
            ],
            League::LaLiga => &[
                ("Real Madrid", 48),
                ("Barcelona", 44),
                ("Atletico Madrid", 42),
                ("Sevilla", 38),
                ("Real Sociedad", 36),
            ],
            _ => &[],
        };

        rows.iter()
            .zip(1..)
            .map(|((team, points), position)| StandingRow::new(position, *team, *points, 15))
            .collect()
    }
}

#[async_trait]
impl MatchFeed for SimulatedFeed {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn fixtures(&self) -> Result<Vec<Fixture>> {
        Ok(Self::card())
    }

    async fn standings(&self, league: League) -> Result<Vec<StandingRow>> {
        Ok(Self::table(league))
    }
}
