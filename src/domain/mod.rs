//! Feed-agnostic domain types and the probability model.

pub mod error;
pub mod fixture;
pub mod league;
pub mod probability;
pub mod standing;

pub use fixture::{Fixture, MatchStatus, Odds};
pub use league::League;
pub use probability::{estimate, implied_probabilities, Confidence, Probability};
pub use standing::StandingRow;
