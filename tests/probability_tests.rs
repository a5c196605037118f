//! Probability model checks against the bundled card.

use kickoff::adapter::outbound::feed::SimulatedFeed;
use kickoff::domain::{estimate, implied_probabilities, Confidence, Fixture, Odds, Probability};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn reference_card_values() {
    let expected = [
        (dec!(45.09), dec!(27.85), dec!(27.06)),
        (dec!(48.67), dec!(26.36), dec!(24.97)),
        (dec!(50.79), dec!(26.84), dec!(22.37)),
        (dec!(55.95), dec!(25.03), dec!(19.02)),
        (dec!(41.40), dec!(28.85), dec!(29.75)),
        (dec!(37.40), dec!(29.22), dec!(33.39)),
    ];

    let card = SimulatedFeed::card();
    assert_eq!(card.len(), expected.len());
    for (fixture, (home, draw, away)) in card.iter().zip(expected) {
        let p = estimate(fixture);
        assert_eq!(p.home_win, home, "{}", fixture.title());
        assert_eq!(p.draw, draw, "{}", fixture.title());
        assert_eq!(p.away_win, away, "{}", fixture.title());
        assert_eq!(p.confidence, Confidence::High);
    }
}

#[test]
fn card_probabilities_sum_to_one_hundred() {
    for fixture in SimulatedFeed::card() {
        let p = estimate(&fixture);
        let diff = (p.total() - dec!(100)).abs();
        assert!(diff <= dec!(0.02), "{} sums to {}", fixture.title(), p.total());
        for value in [p.home_win, p.draw, p.away_win] {
            assert!(value >= Decimal::ZERO && value <= dec!(100));
        }
    }
}

#[test]
fn shorter_odds_mean_higher_probability() {
    for fixture in SimulatedFeed::card() {
        let odds = fixture.odds.unwrap();
        let p = estimate(&fixture);
        let pairs = [
            (odds.home, p.home_win, odds.draw, p.draw),
            (odds.home, p.home_win, odds.away, p.away_win),
            (odds.draw, p.draw, odds.away, p.away_win),
        ];
        for (odds_a, p_a, odds_b, p_b) in pairs {
            if odds_a < odds_b {
                assert!(p_a >= p_b, "{}", fixture.title());
            }
        }
    }
}

#[test]
fn margins_are_reported() {
    let p = implied_probabilities(&Odds::new(dec!(1.70), dec!(3.80), dec!(5.00))).unwrap();
    assert_eq!(p.margin, Some(dec!(5.14)));

    let even = implied_probabilities(&Odds::new(dec!(2), dec!(2), dec!(2))).unwrap();
    assert_eq!(even.home_win, dec!(33.33));
    assert_eq!(even.margin, Some(dec!(50.00)));
}

#[test]
fn absurd_feed_odds_fall_back_to_baseline() {
    let fixture: Fixture = serde_json::from_value(serde_json::json!({
        "home_team": "Ajax",
        "away_team": "PSV",
        "league": "Eredivisie",
        "kickoff": "20:00",
        "odds": {
            "home": "50000000000000000000000000000",
            "draw": "50000000000000000000000000000",
            "away": "50000000000000000000000000000"
        }
    }))
    .unwrap();

    let p = estimate(&fixture);
    assert_eq!(p, Probability::baseline());
    assert_eq!(p.confidence, Confidence::Low);
}
