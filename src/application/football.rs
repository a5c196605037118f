//! Match, prediction and analysis use cases.
//!
//! Orchestrates the feed, the probability model and the optional LLM. Knows
//! nothing about Telegram; the bot adapter only formats what this returns.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{estimate, Fixture, League, Probability, StandingRow};
use crate::error::{Error, Result};
use crate::port::outbound::feed::MatchFeed;
use crate::port::outbound::llm::Llm;

/// Which leagues a request covers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LeagueFilter {
    #[default]
    All,
    Only(Vec<League>),
}

impl LeagueFilter {
    /// Filter from a user's saved leagues; no saved leagues means all.
    #[must_use]
    pub fn from_preferences(leagues: Vec<League>) -> Self {
        if leagues.is_empty() {
            Self::All
        } else {
            Self::Only(leagues)
        }
    }

    #[must_use]
    pub fn admits(&self, fixture: &Fixture) -> bool {
        match self {
            Self::All => true,
            Self::Only(leagues) => leagues.iter().any(|l| l.matches(&fixture.league)),
        }
    }
}

/// A fixture paired with its outcome estimate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub fixture: Fixture,
    pub probability: Probability,
}

impl Prediction {
    #[must_use]
    pub fn for_fixture(fixture: Fixture) -> Self {
        let probability = estimate(&fixture);
        Self {
            fixture,
            probability,
        }
    }
}

/// Fixtures sharing a league, in feed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueGroup<'a> {
    pub league: &'a str,
    pub fixtures: Vec<&'a Fixture>,
}

/// Group fixtures by league, keeping the order leagues first appear in.
#[must_use]
pub fn group_by_league(fixtures: &[Fixture]) -> Vec<LeagueGroup<'_>> {
    let mut groups: Vec<LeagueGroup<'_>> = Vec::new();
    for fixture in fixtures {
        match groups.iter_mut().find(|g| g.league == fixture.league) {
            Some(group) => group.fixtures.push(fixture),
            None => groups.push(LeagueGroup {
                league: &fixture.league,
                fixtures: vec![fixture],
            }),
        }
    }
    groups
}

/// Football use cases behind the bot commands.
pub struct FootballService {
    feed: Arc<dyn MatchFeed>,
    llm: Option<Arc<dyn Llm>>,
    max_question_chars: usize,
}

impl FootballService {
    #[must_use]
    pub fn new(feed: Arc<dyn MatchFeed>) -> Self {
        Self {
            feed,
            llm: None,
            max_question_chars: 500,
        }
    }

    /// Enable analysis through `llm`.
    #[must_use]
    pub fn with_llm(mut self, llm: Arc<dyn Llm>, max_question_chars: usize) -> Self {
        self.llm = Some(llm);
        self.max_question_chars = max_question_chars;
        self
    }

    /// Name of the feed backing this service.
    #[must_use]
    pub fn feed_name(&self) -> &'static str {
        self.feed.name()
    }

    #[must_use]
    pub fn analysis_enabled(&self) -> bool {
        self.llm.is_some()
    }

    /// Today's fixtures.
    ///
    /// # Errors
    ///
    /// Returns an error if the feed fails.
    pub async fn today_fixtures(&self) -> Result<Vec<Fixture>> {
        let fixtures = self.feed.fixtures().await?;
        info!(feed = self.feed.name(), count = fixtures.len(), "Loaded fixtures");
        Ok(fixtures)
    }

    /// Estimates for today's fixtures admitted by `filter`, in feed order.
    ///
    /// # Errors
    ///
    /// Returns an error if the feed fails.
    pub async fn predictions(&self, filter: &LeagueFilter) -> Result<Vec<Prediction>> {
        let predictions: Vec<Prediction> = self
            .today_fixtures()
            .await?
            .into_iter()
            .filter(|f| filter.admits(f))
            .map(Prediction::for_fixture)
            .collect();
        debug!(count = predictions.len(), ?filter, "Computed predictions");
        Ok(predictions)
    }

    /// League table.
    ///
    /// # Errors
    ///
    /// Returns an error if the feed fails.
    pub async fn standings(&self, league: League) -> Result<Vec<StandingRow>> {
        self.feed.standings(league).await
    }

    /// Answer a free-text question with today's card as context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AnalysisDisabled`] without an LLM,
    /// [`Error::EmptyQuestion`] for blank input, or the feed/LLM error.
    pub async fn analyze(&self, question: &str) -> Result<String> {
        let llm = self.llm.as_ref().ok_or(Error::AnalysisDisabled)?;

        let question = question.trim();
        if question.is_empty() {
            return Err(Error::EmptyQuestion);
        }
        let question: String = question.chars().take(self.max_question_chars).collect();

        let predictions = self.predictions(&LeagueFilter::All).await?;
        let prompt = analysis_prompt(&predictions, &question);

        info!(
            provider = llm.name(),
            question_chars = question.chars().count(),
            "Requesting analysis"
        );
        let answer = llm.complete(&prompt).await?;
        Ok(answer.trim().to_string())
    }
}

/// Prompt sent to the LLM for an analysis question.
#[must_use]
pub fn analysis_prompt(predictions: &[Prediction], question: &str) -> String {
    let mut prompt = String::from(
        "You are a football analyst helping a bettor understand today's matches. \
         Answer concisely, state the uncertainty, and never promise an outcome.\n\n\
         Today's matches with odds-implied probabilities:\n",
    );

    if predictions.is_empty() {
        prompt.push_str("(no matches available)\n");
    }
    for p in predictions {
        let f = &p.fixture;
        prompt.push_str(&format!(
            "- {}: {} at {}; home {}%, draw {}%, away {}% ({} confidence)\n",
            f.league,
            f.title(),
            f.kickoff,
            p.probability.home_win,
            p.probability.draw,
            p.probability.away_win,
            p.probability.confidence,
        ));
    }

    prompt.push_str("\nQuestion: ");
    prompt.push_str(question);
    prompt
}
