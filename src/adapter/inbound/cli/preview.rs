//! Handler for the `preview` command.

use std::sync::Arc;

use serde_json::json;

use crate::adapter::inbound::cli::command::PreviewArgs;
use crate::adapter::inbound::cli::output;
use crate::application::{LeagueFilter, Prediction};
use crate::domain::League;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::build_service;

/// Print today's predictions without starting the bot.
pub async fn execute(args: &PreviewArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.init_logging();
    let filter = match &args.league {
        Some(league) => LeagueFilter::Only(vec![League::parse(league)?]),
        None => LeagueFilter::All,
    };

    let service = Arc::new(build_service(&config)?);
    let predictions = service.predictions(&filter).await?;

    if output::is_json() {
        let items: Vec<_> = predictions.iter().map(prediction_json).collect();
        output::json_output(json!({
            "command": "preview",
            "feed": service.feed_name(),
            "predictions": items,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Feed", service.feed_name());
    if predictions.is_empty() {
        output::warning("No matches found");
        return Ok(());
    }

    for prediction in &predictions {
        print_prediction(prediction);
    }
    output::success(&format!("{} matches", predictions.len()));
    Ok(())
}

fn print_prediction(prediction: &Prediction) {
    let fixture = &prediction.fixture;
    let p = &prediction.probability;

    output::section(&format!("{} ({})", fixture.title(), fixture.league));
    output::field("Kickoff", &fixture.kickoff);
    output::field("Home", format!("{}%", p.home_win));
    output::field("Draw", format!("{}%", p.draw));
    output::field("Away", format!("{}%", p.away_win));
    output::field("Confidence", p.confidence);
    if let Some(margin) = p.margin {
        output::field("Margin", format!("{margin}%"));
    }
}

fn prediction_json(prediction: &Prediction) -> serde_json::Value {
    let fixture = &prediction.fixture;
    let p = &prediction.probability;
    json!({
        "league": fixture.league,
        "home_team": fixture.home_team,
        "away_team": fixture.away_team,
        "kickoff": fixture.kickoff,
        "home_win": p.home_win.to_string(),
        "draw": p.draw.to_string(),
        "away_win": p.away_win.to_string(),
        "confidence": p.confidence.as_str(),
        "margin": p.margin.map(|m| m.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Fixture, Odds};
    use rust_decimal_macros::dec;

    #[test]
    fn json_shape() {
        let prediction = Prediction::for_fixture(Fixture::scheduled(
            "Manchester United",
            "Liverpool",
            "Premier League",
            "15:00",
            Some(Odds::new(dec!(2.10), dec!(3.40), dec!(3.50))),
        ));
        let value = prediction_json(&prediction);
        assert_eq!(value["home_win"], "45.09");
        assert_eq!(value["draw"], "27.85");
        assert_eq!(value["away_win"], "27.06");
        assert_eq!(value["confidence"], "high");
        assert_eq!(value["margin"], "5.60");
    }

    #[test]
    fn json_without_odds_has_no_margin() {
        let prediction =
            Prediction::for_fixture(Fixture::scheduled("A", "B", "Serie A", "12:00", None));
        let value = prediction_json(&prediction);
        assert_eq!(value["confidence"], "low");
        assert!(value["margin"].is_null());
    }
}
