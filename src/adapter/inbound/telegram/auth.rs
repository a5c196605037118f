//! Authorization and routing for incoming Telegram messages.

use teloxide::types::ChatId;
use tracing::warn;

use super::command::{parse_command, BotCommand, CommandParseError};
use super::control::{BotControl, Reply, UserContext};
use super::format;

/// What an incoming message asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Run a command.
    Command(BotCommand),
    /// Answer at once without running anything.
    Reply(Reply),
}

/// Decide what to do with a message.
///
/// Returns `None` for:
/// - Messages from unauthorized chats
/// - Plain text that is not handled as an analysis question
pub fn route_message(
    text: &str,
    incoming_chat: ChatId,
    private_chat: bool,
    allowed_chats: &[i64],
    control: &BotControl,
) -> Option<Route> {
    if !is_authorized_chat(incoming_chat, allowed_chats) {
        return None;
    }

    match parse_command(text) {
        Ok(command) => Some(Route::Command(command)),
        Err(CommandParseError::NotACommand) => control
            .text_as_command(text, private_chat)
            .map(Route::Command),
        Err(err) => Some(Route::Reply(Reply::Markdown(format::invalid_command(
            &err.to_string(),
            control.analysis_enabled(),
        )))),
    }
}

/// Process a message and return every reply, progress notice first.
///
/// The live bot sends the notice before running the command; this collects
/// the whole exchange for callers that do not need that split.
pub async fn replies_for_message(
    text: &str,
    incoming_chat: ChatId,
    private_chat: bool,
    user: &UserContext,
    allowed_chats: &[i64],
    control: &BotControl,
) -> Option<Vec<Reply>> {
    let command = match route_message(text, incoming_chat, private_chat, allowed_chats, control)? {
        Route::Command(command) => command,
        Route::Reply(reply) => return Some(vec![reply]),
    };

    let mut replies: Vec<Reply> = control.notice(&command).into_iter().collect();
    replies.extend(control.execute(command, user).await);
    Some(replies)
}

/// Check if a chat may talk to the bot. An empty allow-list admits every chat.
pub fn is_authorized_chat(incoming_chat: ChatId, allowed_chats: &[i64]) -> bool {
    if allowed_chats.is_empty() || allowed_chats.contains(&incoming_chat.0) {
        return true;
    }

    warn!(
        chat_id = incoming_chat.0,
        "Ignoring Telegram message from unauthorized chat"
    );
    false
}
