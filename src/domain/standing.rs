//! League table rows.

use serde::{Deserialize, Serialize};

/// One row of a league table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub position: u32,
    pub team: String,
    pub points: u32,
    pub played: u32,
}

impl StandingRow {
    pub fn new(position: u32, team: impl Into<String>, points: u32, played: u32) -> Self {
        Self {
            position,
            team: team.into(),
            points,
            played,
        }
    }
}
