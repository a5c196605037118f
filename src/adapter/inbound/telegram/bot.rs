//! Long-polling Telegram bot.
//!
//! Wires [`BotControl`] into a teloxide dispatcher with one branch for
//! messages and one for inline keyboard presses.

use std::sync::Arc;
use std::time::Duration;

use teloxide::prelude::*;
use teloxide::types::{BotCommand, ParseMode};
use tracing::{debug, error, info, warn};

use crate::infrastructure::config::telegram::TelegramAppConfig;

use super::auth::{is_authorized_chat, route_message, Route};
use super::command::bot_commands;
use super::control::{BotControl, Reply, UserContext};
use super::format;
use super::keyboard::league_keyboard;

struct BotState {
    control: BotControl,
    allowed_chats: Vec<i64>,
    message_delay: Duration,
}

/// Telegram front end for the football service.
pub struct TelegramBot {
    bot: Bot,
    control: BotControl,
    config: TelegramAppConfig,
}

impl TelegramBot {
    #[must_use]
    pub fn new(token: &str, control: BotControl, config: TelegramAppConfig) -> Self {
        Self {
            bot: Bot::new(token),
            control,
            config,
        }
    }

    /// Poll for updates until Ctrl-C.
    pub async fn run(self) {
        if self.config.register_commands {
            if let Err(e) = register_bot_commands(&self.bot).await {
                warn!(error = %e, "Failed to register bot commands with Telegram");
            }
        }

        let state = Arc::new(BotState {
            control: self.control,
            allowed_chats: self.config.allowed_chats,
            message_delay: Duration::from_millis(self.config.message_delay_ms),
        });

        info!(
            allowed_chats = state.allowed_chats.len(),
            analysis = state.control.analysis_enabled(),
            "Telegram bot started"
        );

        let handler = dptree::entry()
            .branch(Update::filter_message().endpoint({
                let state = Arc::clone(&state);
                move |bot: Bot, msg: Message| handle_message(bot, Arc::clone(&state), msg)
            }))
            .branch(Update::filter_callback_query().endpoint({
                let state = Arc::clone(&state);
                move |bot: Bot, query: CallbackQuery| handle_callback(bot, Arc::clone(&state), query)
            }));

        Dispatcher::builder(self.bot, handler)
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        warn!("Telegram bot shutting down");
    }
}

async fn handle_message(bot: Bot, state: Arc<BotState>, msg: Message) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let user = msg.from.as_ref().map_or_else(
        || UserContext::new(0, "there"),
        |u| UserContext::new(u.id.0, u.first_name.clone()),
    );

    debug!(chat_id = msg.chat.id.0, user_id = user.id, "Received message");

    let route = route_message(
        text,
        msg.chat.id,
        msg.chat.is_private(),
        &state.allowed_chats,
        &state.control,
    );
    let command = match route {
        None => return Ok(()),
        Some(Route::Reply(reply)) => {
            send_replies(&bot, msg.chat.id, vec![reply], state.message_delay).await;
            return Ok(());
        }
        Some(Route::Command(command)) => command,
    };

    if let Some(notice) = state.control.notice(&command) {
        if let Err(e) = send_reply(&bot, msg.chat.id, notice).await {
            error!(error = %e, chat_id = msg.chat.id.0, "Failed to send progress notice");
        }
    }

    let replies = state.control.execute(command, &user).await;
    send_replies(&bot, msg.chat.id, replies, state.message_delay).await;
    Ok(())
}

async fn handle_callback(
    bot: Bot,
    state: Arc<BotState>,
    query: CallbackQuery,
) -> ResponseResult<()> {
    let user = UserContext::new(query.from.id.0, query.from.first_name.clone());
    let target = query.message.as_ref().map(|m| (m.chat().id, m.id()));

    let authorized = target
        .map_or(true, |(chat_id, _)| is_authorized_chat(chat_id, &state.allowed_chats));
    let text = if authorized {
        query
            .data
            .as_deref()
            .and_then(|data| state.control.select_league(&user, data))
    } else {
        None
    };

    if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
        error!(error = %e, "Failed to answer callback query");
    }

    if let (Some(text), Some((chat_id, message_id))) = (text, target) {
        if let Err(e) = bot
            .edit_message_text(chat_id, message_id, text)
            .parse_mode(ParseMode::MarkdownV2)
            .await
        {
            error!(error = %e, "Failed to edit league selection message");
        }
    }
    Ok(())
}

/// Send replies in order, pausing between consecutive messages.
async fn send_replies(bot: &Bot, chat_id: ChatId, replies: Vec<Reply>, delay: Duration) {
    for (i, reply) in replies.into_iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if let Err(e) = send_reply(bot, chat_id, reply).await {
            error!(error = %e, chat_id = chat_id.0, "Failed to send Telegram reply");
            if let Err(e) = bot
                .send_message(chat_id, format::generic_error())
                .parse_mode(ParseMode::MarkdownV2)
                .await
            {
                error!(error = %e, "Failed to send error notice");
            }
            return;
        }
    }
}

async fn send_reply(
    bot: &Bot,
    chat_id: ChatId,
    reply: Reply,
) -> Result<Message, teloxide::RequestError> {
    match reply {
        Reply::Markdown(text) => {
            bot.send_message(chat_id, text)
                .parse_mode(ParseMode::MarkdownV2)
                .await
        }
        Reply::Plain(text) => bot.send_message(chat_id, text).await,
        Reply::LeaguePicker(text) => {
            bot.send_message(chat_id, text)
                .parse_mode(ParseMode::MarkdownV2)
                .reply_markup(league_keyboard())
                .await
        }
    }
}

/// Register bot commands with Telegram for the "/" menu.
pub async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
