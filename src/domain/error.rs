//! Domain validation errors.
//!
//! Returned when odds or league identifiers violate the rules the
//! probability model depends on.
//!
//! ```
//! use kickoff::domain::error::DomainError;
//! use kickoff::domain::fixture::Odds;
//! use kickoff::domain::probability::implied_probabilities;
//! use rust_decimal_macros::dec;
//!
//! let odds = Odds::new(dec!(0.50), dec!(3.40), dec!(3.50));
//! assert!(matches!(
//!     implied_probabilities(&odds),
//!     Err(DomainError::OddsBelowOne { outcome: "home", .. })
//! ));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Decimal odds are a payout multiplier and cannot be below 1.0.
    #[error("{outcome} odds must be at least 1.0, got {value}")]
    OddsBelowOne {
        /// Which outcome carried the invalid price.
        outcome: &'static str,
        /// The invalid price.
        value: Decimal,
    },

    /// Every price is so long that its inverse rounds to zero.
    #[error("odds are too long to derive probabilities")]
    OddsTooLong,

    /// League name or slug not in the supported set.
    #[error("unknown league `{0}`")]
    UnknownLeague(String),
}
