//! Command-line interface definitions.
//!
//! Defines the CLI structure for the kickoff binary using `clap`: running the
//! bot, diagnostic checks, and a terminal preview of today's predictions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Telegram bot for football fixtures and win probabilities
#[derive(Parser, Debug)]
#[command(name = "kickoff")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Telegram bot (foreground)
    Run(RunArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// Print today's predictions to the terminal
    Preview(PreviewArgs),
}

/// Subcommands for `kickoff check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file
    Config(ConfigPathArg),
    /// Verify the bot token against the Telegram API
    Telegram(ConfigPathArg),
    /// Send a test prompt to the configured LLM provider
    Llm(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for the `preview` subcommand.
#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only show one league, by slug or name (e.g. "premier", "Serie A")
    #[arg(short, long)]
    pub league: Option<String>,
}
