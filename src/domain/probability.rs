//! Win-probability estimates.
//!
//! Decimal odds are turned into implied probabilities by normalizing the
//! inverse prices so the three outcomes sum to 100%:
//!
//! ```text
//! p_i = (1 / odds_i) / Σ_j (1 / odds_j) × 100
//! ```
//!
//! The amount by which `Σ 1/odds_j` exceeds one is the bookmaker margin
//! (overround); normalization removes it proportionally.
//!
//! ```
//! use kickoff::domain::fixture::Odds;
//! use kickoff::domain::probability::{implied_probabilities, Confidence};
//! use rust_decimal_macros::dec;
//!
//! let p = implied_probabilities(&Odds::new(dec!(2.10), dec!(3.40), dec!(3.50))).unwrap();
//! assert_eq!(p.home_win, dec!(45.09));
//! assert_eq!(p.draw, dec!(27.85));
//! assert_eq!(p.away_win, dec!(27.06));
//! assert_eq!(p.confidence, Confidence::High);
//! ```

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::warn;

use super::error::DomainError;
use super::fixture::{Fixture, Odds};

/// Decimal places kept on every percentage.
const PERCENT_DP: u32 = 2;

/// How much the estimate can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    /// Fixed baseline, no market data behind it.
    Low,
    /// Derived from bookmaker odds.
    High,
}

impl Confidence {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome probabilities for one match, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probability {
    pub home_win: Decimal,
    pub draw: Decimal,
    pub away_win: Decimal,
    pub confidence: Confidence,
    /// Bookmaker margin in percent, when derived from odds.
    pub margin: Option<Decimal>,
}

impl Probability {
    /// Estimate used when no usable odds exist.
    #[must_use]
    pub const fn baseline() -> Self {
        Self {
            home_win: dec!(45.0),
            draw: dec!(25.0),
            away_win: dec!(30.0),
            confidence: Confidence::Low,
            margin: None,
        }
    }

    /// Sum of the three components.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.home_win + self.draw + self.away_win
    }
}

/// Normalize decimal odds into implied probabilities.
///
/// # Errors
///
/// Returns [`DomainError::OddsBelowOne`] if any price is below 1.0, or
/// [`DomainError::OddsTooLong`] if every price is too long for its inverse to
/// be represented.
pub fn implied_probabilities(odds: &Odds) -> Result<Probability, DomainError> {
    let home = inverse("home", odds.home)?;
    let draw = inverse("draw", odds.draw)?;
    let away = inverse("away", odds.away)?;
    let total = home + draw + away;
    if total.is_zero() {
        return Err(DomainError::OddsTooLong);
    }

    let percent = |inv: Decimal| (inv / total * dec!(100)).round_dp(PERCENT_DP);

    Ok(Probability {
        home_win: percent(home),
        draw: percent(draw),
        away_win: percent(away),
        confidence: Confidence::High,
        margin: Some(((total - Decimal::ONE) * dec!(100)).round_dp(PERCENT_DP)),
    })
}

/// Estimate a fixture's outcome probabilities.
///
/// Falls back to [`Probability::baseline`] when the fixture has no odds or
/// its odds are invalid.
#[must_use]
pub fn estimate(fixture: &Fixture) -> Probability {
    let Some(odds) = &fixture.odds else {
        return Probability::baseline();
    };

    match implied_probabilities(odds) {
        Ok(probability) => probability,
        Err(e) => {
            warn!(
                fixture = %fixture.title(),
                error = %e,
                "Invalid odds, using baseline estimate"
            );
            Probability::baseline()
        }
    }
}

fn inverse(outcome: &'static str, price: Decimal) -> Result<Decimal, DomainError> {
    if price < Decimal::ONE {
        return Err(DomainError::OddsBelowOne {
            outcome,
            value: price,
        });
    }
    Decimal::ONE
        .checked_div(price)
        .ok_or(DomainError::OddsTooLong)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn odds(home: Decimal, draw: Decimal, away: Decimal) -> Odds {
        Odds::new(home, draw, away)
    }

    // -------------------------------------------------------------------------
    // Normalization
    // -------------------------------------------------------------------------

    #[test]
    fn normalizes_reference_odds() {
        let p = implied_probabilities(&odds(dec!(2.10), dec!(3.40), dec!(3.50))).unwrap();
        assert_eq!(p.home_win, dec!(45.09));
        assert_eq!(p.draw, dec!(27.85));
        assert_eq!(p.away_win, dec!(27.06));
        assert_eq!(p.margin, Some(dec!(5.60)));
        assert_eq!(p.confidence, Confidence::High);
    }

    #[test]
    fn normalizes_heavy_favourite() {
        let p = implied_probabilities(&odds(dec!(1.70), dec!(3.80), dec!(5.00))).unwrap();
        assert_eq!(p.home_win, dec!(55.95));
        assert_eq!(p.draw, dec!(25.03));
        assert_eq!(p.away_win, dec!(19.02));
        assert_eq!(p.margin, Some(dec!(5.14)));
    }

    #[test]
    fn equal_odds_split_evenly() {
        let p = implied_probabilities(&odds(dec!(2.0), dec!(2.0), dec!(2.0))).unwrap();
        assert_eq!(p.home_win, dec!(33.33));
        assert_eq!(p.draw, dec!(33.33));
        assert_eq!(p.away_win, dec!(33.33));
        assert_eq!(p.margin, Some(dec!(50.00)));
    }

    #[test]
    fn fair_book_has_zero_margin() {
        let p = implied_probabilities(&odds(dec!(2), dec!(4), dec!(4))).unwrap();
        assert_eq!(p.home_win, dec!(50));
        assert_eq!(p.draw, dec!(25));
        assert_eq!(p.away_win, dec!(25));
        assert_eq!(p.margin, Some(Decimal::ZERO));
    }

    #[test]
    fn components_sum_to_one_hundred() {
        let cases = [
            (dec!(2.10), dec!(3.40), dec!(3.50)),
            (dec!(1.95), dec!(3.60), dec!(3.80)),
            (dec!(1.85), dec!(3.50), dec!(4.20)),
            (dec!(2.30), dec!(3.30), dec!(3.20)),
            (dec!(2.50), dec!(3.20), dec!(2.80)),
            (dec!(1.01), dec!(25), dec!(50)),
        ];

        for (h, d, a) in cases {
            let p = implied_probabilities(&odds(h, d, a)).unwrap();
            let drift = (p.total() - dec!(100)).abs();
            assert!(drift <= dec!(0.02), "sum drifted by {drift} for {h}/{d}/{a}");
        }
    }

    #[test]
    fn shorter_price_gets_higher_probability() {
        let p = implied_probabilities(&odds(dec!(2.50), dec!(3.20), dec!(2.80))).unwrap();
        assert!(p.home_win > p.away_win);
        assert!(p.away_win > p.draw);
    }

    #[test]
    fn evens_odds_are_accepted() {
        let p = implied_probabilities(&odds(dec!(1.0), dec!(10), dec!(10))).unwrap();
        assert!(p.home_win > dec!(80));
    }

    #[test]
    fn rejects_odds_below_one() {
        assert_eq!(
            implied_probabilities(&odds(dec!(2.0), dec!(0), dec!(3.0))),
            Err(DomainError::OddsBelowOne {
                outcome: "draw",
                value: dec!(0),
            })
        );
        assert!(matches!(
            implied_probabilities(&odds(dec!(2.0), dec!(3.0), dec!(-1.5))),
            Err(DomainError::OddsBelowOne { outcome: "away", .. })
        ));
    }

    #[test]
    fn rejects_odds_too_long_to_invert() {
        assert_eq!(
            implied_probabilities(&odds(Decimal::MAX, Decimal::MAX, Decimal::MAX)),
            Err(DomainError::OddsTooLong)
        );
    }

    #[test]
    fn one_huge_price_still_normalizes() {
        let p = implied_probabilities(&odds(dec!(2.0), dec!(3.0), Decimal::MAX)).unwrap();
        assert_eq!(p.away_win, Decimal::ZERO);
        assert_eq!(p.home_win, dec!(60));
        assert_eq!(p.draw, dec!(40));
    }

    // -------------------------------------------------------------------------
    // Fixture estimates
    // -------------------------------------------------------------------------

    #[test]
    fn estimate_without_odds_uses_baseline() {
        let fixture = Fixture::scheduled("A", "B", "Serie A", "12:00", None);
        let p = estimate(&fixture);
        assert_eq!(p, Probability::baseline());
        assert_eq!(p.confidence, Confidence::Low);
        assert_eq!(p.total(), dec!(100));
    }

    #[test]
    fn estimate_with_invalid_odds_uses_baseline() {
        let fixture = Fixture::scheduled(
            "A",
            "B",
            "Serie A",
            "12:00",
            Some(odds(dec!(0.5), dec!(3), dec!(3))),
        );
        assert_eq!(estimate(&fixture), Probability::baseline());
    }

    #[test]
    fn estimate_with_huge_odds_uses_baseline() {
        let huge = dec!(50000000000000000000000000000);
        let fixture =
            Fixture::scheduled("A", "B", "Serie A", "12:00", Some(odds(huge, huge, huge)));
        assert_eq!(estimate(&fixture), Probability::baseline());
    }

    #[test]
    fn estimate_with_odds_is_high_confidence() {
        let fixture = Fixture::scheduled(
            "Manchester United",
            "Liverpool",
            "Premier League",
            "15:00",
            Some(odds(dec!(2.10), dec!(3.40), dec!(3.50))),
        );
        let p = estimate(&fixture);
        assert_eq!(p.confidence, Confidence::High);
        assert_eq!(p.home_win, dec!(45.09));
    }

    #[test]
    fn confidence_display_is_lowercase() {
        assert_eq!(Confidence::High.to_string(), "high");
        assert_eq!(Confidence::Low.to_string(), "low");
    }
}
