pub mod general_message;
pub mod message;

use std::sync::Arc;
use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::database::store::SubscriptionStore;
use crate::services::suggest::StationSuggester;

/// Error type shared by every update endpoint
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;
/// Result returned by every update endpoint
pub type HandlerResult = Result<(), HandlerError>;

/// Everything a command handler needs besides the bot and the message
#[derive(Clone)]
pub struct BotContext {
    pub store: Arc<SubscriptionStore>,
    pub suggester: Arc<dyn StationSuggester>,
    pub webapp_url: Option<reqwest::Url>,
}

pub struct BotHandler {
    pub ctx: BotContext,
}

impl BotHandler {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }

    pub fn schema(&self) -> UpdateHandler<HandlerError> {
        let ctx = self.ctx.clone();

        Update::filter_message()
            .branch(
                dptree::entry()
                    .filter_command::<crate::bot::commands::Command>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: crate::bot::commands::Command| {
                        let ctx = ctx.clone();
                        async move { message::command_handler(bot, msg, cmd, ctx).await }
                    }),
            )
            .branch(dptree::endpoint(|bot: Bot, msg: Message| async move {
                general_message::handle_general_message(bot, msg).await
            }))
    }
}
