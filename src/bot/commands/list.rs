use teloxide::prelude::*;
use crate::bot::handlers::message::sender_label;
use crate::database::{models::SubscriptionRecord, store::SubscriptionStore};
use crate::utils::{feedback::CommandFeedback, logging::log_command_success};

/// Room left for the list body below Telegram's 4096 character message limit
pub const MAX_LIST_CHARS: usize = 3500;

/// Numbered list of a chat's subscriptions, or a hint when there are none
pub fn format_subscription_list(records: &[SubscriptionRecord]) -> String {
    if records.is_empty() {
        return "You have no subscriptions yet.\n\n\
            Create one with /subscribe Moscow, Kazan, 2024-05-01, seat"
            .to_string();
    }

    let mut message_text = format!("📋 Your subscriptions ({}):\n\n", records.len());
    let mut length = message_text.chars().count();
    for (i, record) in records.iter().enumerate() {
        let line = format!("{}. {}\n", i + 1, record.route_summary());
        length += line.chars().count();
        if length > MAX_LIST_CHARS {
            message_text.push_str(&format!("…and {} more", records.len() - i));
            break;
        }
        message_text.push_str(&line);
    }
    message_text
}

pub async fn handle_list(
    bot: Bot,
    msg: Message,
    store: &SubscriptionStore,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id.0;
    let records = store.list_for_user(chat_id).await;

    CommandFeedback::new(bot, msg.chat.id)
        .info(&format_subscription_list(&records))
        .await?;

    log_command_success(
        "/list",
        &sender_label(&msg),
        chat_id,
        Some(&format!("{} subscriptions", records.len())),
    );
    Ok(())
}
