//! Telegram command parsing.

use crate::domain::League;

/// Supported Telegram commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Matches,
    Probabilities { league: Option<League> },
    Leagues,
    MyLeagues,
    ClearLeagues,
    Standings { league: League },
    Analysis { question: String },
    Help,
    About,
}

/// Parse error for Telegram command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
    MissingArgument(&'static str),
    UnknownLeague(String),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
            Self::MissingArgument(name) => write!(f, "missing argument `{name}`"),
            Self::UnknownLeague(value) => write!(
                f,
                "unknown league `{value}` (use: {})",
                League::ALL.map(League::slug).join(", ")
            ),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a Telegram message into a bot command.
///
/// Commands may carry an `@botname` suffix. Each command also answers to
/// its Portuguese name.
pub fn parse_command(text: &str) -> Result<BotCommand, CommandParseError> {
    let text = text.trim_start();
    let (raw_command, rest) = text
        .split_once(char::is_whitespace)
        .map_or((text, ""), |(head, tail)| (head, tail.trim()));
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    let command = raw_command
        .split_once('@')
        .map_or(raw_command, |(head, _)| head);

    match command {
        "/start" => Ok(BotCommand::Start),
        "/matches" | "/jogos" => Ok(BotCommand::Matches),
        "/probabilities" | "/probabilidades" => {
            let league = if rest.is_empty() {
                None
            } else {
                Some(parse_league(rest)?)
            };
            Ok(BotCommand::Probabilities { league })
        }
        "/leagues" | "/ligas" => Ok(BotCommand::Leagues),
        "/myleagues" | "/minhasligas" => Ok(BotCommand::MyLeagues),
        "/clearleagues" | "/limparligas" => Ok(BotCommand::ClearLeagues),
        "/standings" | "/classificacao" => {
            if rest.is_empty() {
                return Err(CommandParseError::MissingArgument("league"));
            }
            Ok(BotCommand::Standings {
                league: parse_league(rest)?,
            })
        }
        "/analysis" | "/analise" => {
            if rest.is_empty() {
                return Err(CommandParseError::MissingArgument("question"));
            }
            Ok(BotCommand::Analysis {
                question: rest.to_string(),
            })
        }
        "/help" | "/ajuda" => Ok(BotCommand::Help),
        "/about" | "/sobre" => Ok(BotCommand::About),
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}

fn parse_league(value: &str) -> Result<League, CommandParseError> {
    League::parse(value).map_err(|_| CommandParseError::UnknownLeague(value.to_string()))
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("matches", "Today's matches"),
        ("probabilities", "Win probabilities for today's matches"),
        ("leagues", "Choose the leagues you follow"),
        ("myleagues", "Show the leagues you follow"),
        ("clearleagues", "Forget the leagues you follow"),
        ("standings", "League table, e.g. /standings premier"),
        ("analysis", "Ask for an analysis, e.g. /analysis who wins?"),
        ("help", "How to use the bot"),
        ("about", "About this bot"),
    ]
}
