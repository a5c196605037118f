use tracing::{error, info};

use crate::application::{group_by_league, LeagueFilter};
use crate::domain::League;
use crate::error::Error;

use super::super::command::BotCommand;
use super::super::format;
use super::super::keyboard::parse_callback;
use super::{BotControl, Reply, UserContext};

impl BotControl {
    /// Execute one parsed command and return the messages to send, in order.
    ///
    /// The progress notice from [`BotControl::notice`] is not included.
    pub async fn execute(&self, command: BotCommand, user: &UserContext) -> Vec<Reply> {
        info!(user_id = user.id, ?command, "Executing command");
        match command {
            BotCommand::Start => vec![Reply::Markdown(format::welcome(
                &user.first_name,
                self.analysis_enabled(),
            ))],
            BotCommand::Matches => self.matches().await,
            BotCommand::Probabilities { league } => self.probabilities(league, user).await,
            BotCommand::Leagues => vec![Reply::LeaguePicker(format::league_picker())],
            BotCommand::MyLeagues => vec![Reply::Markdown(format::my_leagues(
                &self.preferences.leagues(user.id),
            ))],
            BotCommand::ClearLeagues => {
                let removed = self.preferences.clear(user.id);
                vec![Reply::Markdown(format::leagues_cleared(removed))]
            }
            BotCommand::Standings { league } => self.standings(league).await,
            BotCommand::Analysis { question } => self.analysis(&question).await,
            BotCommand::Help => vec![Reply::Markdown(format::help(self.analysis_enabled()))],
            BotCommand::About => vec![Reply::Markdown(format::about(
                env!("CARGO_PKG_VERSION"),
                chrono::Utc::now() - self.started_at,
                self.service.feed_name(),
                self.analysis_enabled(),
            ))],
        }
    }

    /// Interpret text that is not a command.
    ///
    /// Private-chat text becomes an analysis question when analysis is
    /// enabled; everything else is ignored.
    #[must_use]
    pub fn text_as_command(&self, text: &str, private_chat: bool) -> Option<BotCommand> {
        let question = text.trim();
        if !private_chat || !self.analysis_enabled() || question.is_empty() {
            return None;
        }
        Some(BotCommand::Analysis {
            question: question.to_string(),
        })
    }

    /// Progress notice to show before `command` does slow work.
    #[must_use]
    pub fn notice(&self, command: &BotCommand) -> Option<Reply> {
        let text = match command {
            BotCommand::Matches => format::fetching_matches(),
            BotCommand::Probabilities { .. } => format::calculating_probabilities(),
            BotCommand::Analysis { question }
                if self.analysis_enabled() && !question.trim().is_empty() =>
            {
                format::analysing()
            }
            _ => return None,
        };
        Some(Reply::Markdown(text))
    }

    /// Handle a press on the league keyboard.
    ///
    /// Returns the text that replaces the keyboard message, or `None` for
    /// callback data this bot did not produce.
    pub fn select_league(&self, user: &UserContext, data: &str) -> Option<String> {
        let league = parse_callback(data)?;
        let text = if self.preferences.add(user.id, league) {
            info!(user_id = user.id, league = league.slug(), "League added to preferences");
            format::league_added(league)
        } else {
            format::league_already_added(league)
        };
        Some(text)
    }

    async fn matches(&self) -> Vec<Reply> {
        let fixtures = match self.service.today_fixtures().await {
            Ok(fixtures) => fixtures,
            Err(e) => {
                error!(error = %e, "Failed to load matches");
                return vec![Reply::Markdown(format::matches_failed())];
            }
        };

        if fixtures.is_empty() {
            return vec![Reply::Markdown(format::no_matches())];
        }

        group_by_league(&fixtures)
            .iter()
            .take(self.limits.max_leagues)
            .map(|group| {
                Reply::Markdown(format::league_block(group, self.limits.matches_per_league))
            })
            .collect()
    }

    async fn probabilities(&self, league: Option<League>, user: &UserContext) -> Vec<Reply> {
        let filter = match league {
            Some(league) => LeagueFilter::Only(vec![league]),
            None => LeagueFilter::from_preferences(self.preferences.leagues(user.id)),
        };

        let predictions = match self.service.predictions(&filter).await {
            Ok(predictions) => predictions,
            Err(e) => {
                error!(error = %e, "Failed to compute probabilities");
                return vec![Reply::Markdown(format::probabilities_failed())];
            }
        };

        if predictions.is_empty() {
            let leagues = match &filter {
                LeagueFilter::All => &[][..],
                LeagueFilter::Only(leagues) => leagues.as_slice(),
            };
            return vec![Reply::Markdown(format::no_predictions(leagues))];
        }

        predictions
            .iter()
            .take(self.limits.prediction_limit)
            .map(|p| Reply::Markdown(format::prediction_card(p)))
            .collect()
    }

    async fn standings(&self, league: League) -> Vec<Reply> {
        match self.service.standings(league).await {
            Ok(rows) => vec![Reply::Markdown(format::standings(league, &rows))],
            Err(e) => {
                error!(error = %e, league = league.slug(), "Failed to load standings");
                vec![Reply::Markdown(format::generic_error())]
            }
        }
    }

    async fn analysis(&self, question: &str) -> Vec<Reply> {
        let reply = match self.service.analyze(question).await {
            Ok(answer) => Reply::Plain(format::fit_message(&answer)),
            Err(Error::AnalysisDisabled) => Reply::Markdown(format::analysis_disabled()),
            Err(Error::EmptyQuestion) => Reply::Markdown(format::invalid_command(
                "missing argument `question`",
                true,
            )),
            Err(e) => {
                error!(error = %e, "Analysis request failed");
                Reply::Markdown(format::analysis_failed())
            }
        };
        vec![reply]
    }
}
