//! Telegram bot front end.
//!
//! Parses commands, runs them against the football service and renders the
//! replies as `MarkdownV2` messages, plus the inline keyboard used to pick
//! leagues.

mod auth;
mod command;
mod keyboard;

pub mod bot;
pub mod control;
pub mod format;

pub use auth::{is_authorized_chat, replies_for_message, route_message, Route};
pub use bot::{register_bot_commands, TelegramBot};
pub use command::{bot_commands, parse_command, BotCommand, CommandParseError};
pub use control::{BotControl, DisplayLimits, Reply, UserContext};
pub use keyboard::{callback_data, league_keyboard, parse_callback};
