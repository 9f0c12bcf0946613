use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use crate::bot::commands::{self, Command};
use crate::bot::handlers::{BotContext, HandlerResult};

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    ctx: BotContext,
) -> HandlerResult {
    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string()).await?;
        }
        Command::Start => {
            commands::start::handle_start(bot, msg, ctx.webapp_url.as_ref()).await?;
        }
        Command::Stations { prefix } => {
            commands::stations::handle_stations(bot, msg, prefix, ctx.suggester.as_ref()).await?;
        }
        Command::Subscribe { args } => {
            commands::subscribe::handle_subscribe(bot, msg, args, &ctx.store).await?;
        }
        Command::List => {
            commands::list::handle_list(bot, msg, &ctx.store).await?;
        }
    }
    Ok(())
}

/// Display name of the message author for log lines
pub fn sender_label(msg: &Message) -> String {
    msg.from()
        .map(|u| match &u.username {
            Some(name) => format!("@{name}"),
            None => u.id.0.to_string(),
        })
        .unwrap_or_else(|| "unknown".to_string())
}
