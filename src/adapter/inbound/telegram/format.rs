//! Message templates for bot replies.
//!
//! Everything here renders Telegram `MarkdownV2`. Literal text goes through
//! [`escape_markdown`] as well, so only the `*` of deliberate bold runs are
//! left unescaped.

use chrono::Duration;

use crate::application::{LeagueGroup, Prediction};
use crate::domain::{League, StandingRow};

use super::command::bot_commands;

/// Telegram's maximum message length, in characters.
pub const MESSAGE_LIMIT: usize = 4096;

fn bold(text: &str) -> String {
    format!("*{}*", escape_markdown(text))
}

fn command_lines(analysis_enabled: bool) -> String {
    bot_commands()
        .into_iter()
        .filter(|(cmd, _)| analysis_enabled || *cmd != "analysis")
        .map(|(cmd, desc)| escape_markdown(&format!("/{cmd} - {desc}")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reply to `/start`.
pub fn welcome(first_name: &str, analysis_enabled: bool) -> String {
    format!(
        "🎯 {} 🎯\n\n\
        {} 👋\n\n\
        {}\n\n\
        {}\n\n\
        {}\n\n\
        {} 🚀",
        bold("Welcome to Kickoff!"),
        escape_markdown(&format!("Hi {first_name}!")),
        escape_markdown(
            "I'm your football statistics and probabilities assistant, here to help \
             with match predictions and analysis. ⚽"
        ),
        bold("Available commands:"),
        command_lines(analysis_enabled),
        escape_markdown("Pick a command above to get started!"),
    )
}

/// Reply to `/help`.
pub fn help(analysis_enabled: bool) -> String {
    let mut text = format!(
        "📚 {}\n\n{}\n\n{}\n{}\n\n{}\n",
        bold("Bot help"),
        escape_markdown(
            "This bot shows today's football matches and win probabilities \
             derived from bookmaker odds."
        ),
        bold("How to use:"),
        command_lines(analysis_enabled),
        bold("Important:"),
    );
    if analysis_enabled {
        text.push_str(&escape_markdown(
            "💬 In a private chat you can also just type a question to get an analysis.\n",
        ));
    }
    text.push_str(&escape_markdown(
        "⚠️ Probabilities come from public odds and simple statistics.\n\
         ⚠️ Predictions are never guaranteed to be accurate.\n\
         ⚠️ Use this bot for information only.\n\
         ⚠️ Gamble responsibly!",
    ));
    text
}

/// Reply to `/about`.
pub fn about(version: &str, uptime: Duration, feed: &str, analysis_enabled: bool) -> String {
    format!(
        "ℹ️ {}\n\n\
        {} {}\n\
        {} {}\n\n\
        {}\n\
        ✅ {}\n\
        ✅ {}\n\
        ✅ {}\n\
        {} {}\n\n\
        {} {}\n\n\
        {}\n\
        {}",
        bold("About Kickoff"),
        bold("Version:"),
        escape_markdown(version),
        bold("Uptime:"),
        escape_markdown(&format_uptime(uptime)),
        bold("Features:"),
        escape_markdown("Today's football matches"),
        escape_markdown("Odds-implied win probabilities"),
        escape_markdown("Multiple leagues and personal league selection"),
        if analysis_enabled { "✅" } else { "➖" },
        escape_markdown("Free-text match analysis"),
        bold("Data source:"),
        escape_markdown(feed),
        bold("Disclaimer:"),
        escape_markdown(
            "This bot is provided \"as is\" without any guarantee of accuracy. \
             Use it at your own risk!"
        ),
    )
}

/// `1d 2h 3m`, omitting leading zero units.
pub fn format_uptime(uptime: Duration) -> String {
    let minutes = uptime.num_minutes().max(0);
    let (days, hours, mins) = (minutes / 1440, (minutes % 1440) / 60, minutes % 60);
    match (days, hours) {
        (0, 0) => format!("{mins}m"),
        (0, _) => format!("{hours}h {mins}m"),
        _ => format!("{days}d {hours}h {mins}m"),
    }
}

pub fn fetching_matches() -> String {
    escape_markdown("🔄 Fetching today's matches... Please wait.")
}

pub fn calculating_probabilities() -> String {
    escape_markdown("🔄 Calculating probabilities... Please wait.")
}

pub fn analysing() -> String {
    escape_markdown("🤔 Analysing... This can take a few seconds.")
}

pub fn no_matches() -> String {
    escape_markdown(
        "❌ Sorry, I couldn't find any matches for today right now.\nPlease try again later.",
    )
}

pub fn no_predictions(leagues: &[League]) -> String {
    if leagues.is_empty() {
        return escape_markdown("❌ Sorry, I couldn't calculate probabilities right now.");
    }
    let names: Vec<&str> = leagues.iter().map(|l| l.name()).collect();
    escape_markdown(&format!(
        "ℹ️ No matches today for {}. Use /probabilities with another league or /clearleagues.",
        names.join(", ")
    ))
}

pub fn matches_failed() -> String {
    escape_markdown("❌ Something went wrong while fetching the matches. Please try again.")
}

pub fn probabilities_failed() -> String {
    escape_markdown("❌ Something went wrong while calculating the probabilities. Please try again.")
}

pub fn generic_error() -> String {
    escape_markdown("❌ Something went wrong. Please try again later.")
}

pub fn analysis_disabled() -> String {
    escape_markdown("ℹ️ Match analysis is not enabled on this bot.")
}

pub fn analysis_failed() -> String {
    escape_markdown("❌ The analysis service is unavailable right now. Please try again later.")
}

pub fn invalid_command(error: &str, analysis_enabled: bool) -> String {
    format!(
        "{}\n\n{}",
        escape_markdown(&format!("Invalid command: {error}")),
        command_lines(analysis_enabled)
    )
}

/// One message of the `/matches` reply.
pub fn league_block(group: &LeagueGroup<'_>, limit: usize) -> String {
    let mut message = format!("🏆 {}\n\n", bold(group.league));
    for fixture in group.fixtures.iter().take(limit) {
        message.push_str(&format!(
            "⚽ {}\n🕐 {}\n\n",
            escape_markdown(&fixture.title()),
            escape_markdown(&fixture.kickoff)
        ));
    }
    message.truncate(message.trim_end().len());
    message
}

/// One card of the `/probabilities` reply.
pub fn prediction_card(prediction: &Prediction) -> String {
    let fixture = &prediction.fixture;
    let p = &prediction.probability;

    let mut message = format!(
        "⚽ {}\n\n🏠 {} 🏃\n🕐 {}\n",
        bold(&fixture.league),
        escape_markdown(&fixture.title()),
        escape_markdown(&format!("Kickoff: {}", fixture.kickoff)),
    );
    if let Some(score) = &fixture.score {
        message.push_str(&format!("📊 {}\n", escape_markdown(&format!("Score: {score}"))));
    }

    message.push_str(&format!("\n📈 {}\n", bold("Probabilities:")));
    message.push_str(&escape_markdown(&format!(
        "🟢 {} win: {}%\n⚪ Draw: {}%\n🔴 {} win: {}%\nConfidence: {}",
        fixture.home_team,
        p.home_win,
        p.draw,
        fixture.away_team,
        p.away_win,
        p.confidence.as_str().to_uppercase(),
    )));
    if let Some(margin) = p.margin {
        message.push_str(&escape_markdown(&format!("\nBookmaker margin: {margin}%")));
    }
    message
}

/// Reply to `/standings`.
pub fn standings(league: League, rows: &[StandingRow]) -> String {
    if rows.is_empty() {
        return escape_markdown(&format!("ℹ️ No standings available for {league} yet."));
    }

    let lines: Vec<String> = rows
        .iter()
        .map(|r| {
            escape_markdown(&format!(
                "{}. {}: {} pts ({} played)",
                r.position, r.team, r.points, r.played
            ))
        })
        .collect();
    format!("🏆 {}\n\n{}", bold(&format!("{league} standings")), lines.join("\n"))
}

/// Prompt shown above the league keyboard.
pub fn league_picker() -> String {
    format!("🏆 {}", bold("Select the leagues you follow:"))
}

pub fn league_added(league: League) -> String {
    escape_markdown(&format!("✅ {league} added to your preferences!"))
}

pub fn league_already_added(league: League) -> String {
    escape_markdown(&format!("ℹ️ {league} is already in your preferences!"))
}

pub fn my_leagues(leagues: &[League]) -> String {
    if leagues.is_empty() {
        return escape_markdown("ℹ️ You don't follow any league yet. Use /leagues to pick some.");
    }
    let lines: Vec<String> = leagues
        .iter()
        .map(|l| format!("• {}", escape_markdown(l.name())))
        .collect();
    format!("⭐ {}\n\n{}", bold("Your leagues:"), lines.join("\n"))
}

pub fn leagues_cleared(removed: usize) -> String {
    if removed == 0 {
        return escape_markdown("ℹ️ You weren't following any league.");
    }
    escape_markdown(&format!("🧹 Forgot {removed} league(s)."))
}

/// Fit free text into one Telegram message.
///
/// Telegram measures the limit in UTF-16 code units, so characters outside
/// the Basic Multilingual Plane count twice.
pub fn fit_message(text: &str) -> String {
    if utf16_len(text) <= MESSAGE_LIMIT {
        return text.to_string();
    }
    truncate(text, MESSAGE_LIMIT - 3)
}

/// Truncate to `max_units` UTF-16 code units with an ellipsis, never
/// splitting a character.
pub fn truncate(s: &str, max_units: usize) -> String {
    if utf16_len(s) <= max_units {
        return s.to_string();
    }

    let mut used = 0;
    let mut truncated = String::new();
    for c in s.chars() {
        used += c.len_utf16();
        if used > max_units {
            break;
        }
        truncated.push(c);
    }
    truncated.push_str("...");
    truncated
}

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Escape special characters for Telegram `MarkdownV2`.
pub fn escape_markdown(text: &str) -> String {
    let special_chars = [
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
        '\\',
    ];
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::group_by_league;
    use crate::domain::{Fixture, Odds};
    use rust_decimal_macros::dec;

    /// True when every MarkdownV2 reserved character outside bold markers is escaped.
    fn is_valid_markdown_v2(text: &str) -> bool {
        let reserved = "_[]()~`>#+-=|{}.!";
        let mut escaped = false;
        for c in text.chars() {
            if escaped {
                escaped = false;
                continue;
            }
            if c == '\\' {
                escaped = true;
            } else if reserved.contains(c) {
                return false;
            }
        }
        !escaped
    }

    fn clasico() -> Prediction {
        Prediction::for_fixture(Fixture::scheduled(
            "Real Madrid",
            "Barcelona",
            "LaLiga",
            "20:00",
            Some(Odds::new(dec!(1.95), dec!(3.60), dec!(3.80))),
        ))
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("hello"), "hello");
        assert_eq!(escape_markdown("hello_world"), "hello\\_world");
        assert_eq!(escape_markdown("*bold*"), "\\*bold\\*");
        assert_eq!(escape_markdown("48.67%"), "48\\.67%");
        assert_eq!(escape_markdown("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 5), "hello...");
        assert_eq!(truncate("⚽⚽⚽", 2), "⚽⚽...");
    }

    #[test]
    fn fit_message_respects_limit() {
        let long = "a".repeat(MESSAGE_LIMIT + 10);
        assert_eq!(fit_message(&long).chars().count(), MESSAGE_LIMIT);
        assert_eq!(fit_message("short"), "short");
    }

    #[test]
    fn fit_message_counts_utf16_units() {
        // Each emoji is a surrogate pair.
        let exact = "😀".repeat(MESSAGE_LIMIT / 2);
        assert_eq!(fit_message(&exact), exact);

        let over = "😀".repeat(MESSAGE_LIMIT / 2 + 1);
        let fitted = fit_message(&over);
        assert!(fitted.encode_utf16().count() <= MESSAGE_LIMIT);
        assert!(fitted.ends_with("..."));
        assert_eq!(fitted.chars().filter(|c| *c == '😀').count(), (MESSAGE_LIMIT - 3) / 2);
    }

    #[test]
    fn truncate_keeps_surrogate_pairs_whole() {
        assert_eq!(truncate("😀😀😀", 3), "😀...");
    }

    #[test]
    fn prediction_card_shows_probabilities() {
        let card = prediction_card(&clasico());
        assert!(card.contains("*LaLiga*"));
        assert!(card.contains("Real Madrid vs Barcelona"));
        assert!(card.contains("Real Madrid win: 48\\.67%"));
        assert!(card.contains("Draw: 26\\.36%"));
        assert!(card.contains("Barcelona win: 24\\.97%"));
        assert!(card.contains("Confidence: HIGH"));
        assert!(card.contains("Bookmaker margin: 5\\.38%"));
        assert!(!card.contains("Score"));
        assert!(is_valid_markdown_v2(&card));
    }

    #[test]
    fn prediction_card_shows_score_and_low_confidence() {
        let mut fixture = Fixture::scheduled("Team-A", "Team.B", "Serie A", "12:00", None);
        fixture.score = Some("2-1".to_string());
        let card = prediction_card(&Prediction::for_fixture(fixture));
        assert!(card.contains("Score: 2\\-1"));
        assert!(card.contains("Confidence: LOW"));
        assert!(!card.contains("margin"));
        assert!(is_valid_markdown_v2(&card));
    }

    #[test]
    fn league_block_limits_matches() {
        let fixtures: Vec<Fixture> = (0..5)
            .map(|i| Fixture::scheduled(format!("H{i}"), format!("A{i}"), "Ligue 1", "19:45", None))
            .collect();
        let groups = group_by_league(&fixtures);
        let block = league_block(&groups[0], 3);
        assert!(block.starts_with("🏆 *Ligue 1*"));
        assert!(block.contains("H2 vs A2"));
        assert!(!block.contains("H3 vs A3"));
        assert!(is_valid_markdown_v2(&block));
    }

    #[test]
    fn standings_render_rows() {
        let rows = vec![
            StandingRow::new(1, "Real Madrid", 48, 15),
            StandingRow::new(2, "Barcelona", 44, 15),
        ];
        let text = standings(League::LaLiga, &rows);
        assert!(text.contains("*LaLiga standings*"));
        assert!(text.contains("1\\. Real Madrid: 48 pts \\(15 played\\)"));
        assert!(is_valid_markdown_v2(&text));
    }

    #[test]
    fn empty_standings_say_so() {
        let text = standings(League::SerieA, &[]);
        assert!(text.contains("No standings available for Serie A"));
    }

    #[test]
    fn static_texts_are_valid_markdown() {
        let texts = [
            welcome("Ana_Maria", true),
            welcome("Jo", false),
            help(true),
            help(false),
            about("0.1.0", Duration::minutes(125), "simulated", true),
            fetching_matches(),
            calculating_probabilities(),
            analysing(),
            no_matches(),
            no_predictions(&[]),
            no_predictions(&[League::EuropaLeague]),
            matches_failed(),
            probabilities_failed(),
            generic_error(),
            analysis_disabled(),
            analysis_failed(),
            invalid_command("unknown command `/x`", true),
            league_picker(),
            league_added(League::Ligue1),
            league_already_added(League::Ligue1),
            my_leagues(&[]),
            my_leagues(&[League::PremierLeague, League::SerieA]),
            leagues_cleared(0),
            leagues_cleared(2),
        ];
        for text in texts {
            assert!(is_valid_markdown_v2(&text), "invalid MarkdownV2: {text}");
        }
    }

    #[test]
    fn welcome_lists_commands() {
        let text = welcome("Ana", true);
        assert!(text.contains("Hi Ana\\!"));
        assert!(text.contains("/matches \\- Today's matches"));
        assert!(text.contains("/analysis"));
        assert!(!welcome("Ana", false).contains("/analysis"));
    }

    #[test]
    fn uptime_formatting() {
        assert_eq!(format_uptime(Duration::minutes(5)), "5m");
        assert_eq!(format_uptime(Duration::minutes(125)), "2h 5m");
        assert_eq!(format_uptime(Duration::minutes(1441)), "1d 0h 1m");
    }
}
