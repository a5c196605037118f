//! Application services: use cases composed from domain logic and ports.

pub mod football;

pub use football::{group_by_league, FootballService, LeagueFilter, LeagueGroup, Prediction};
