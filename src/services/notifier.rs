//! Outbound messages to subscribers.

use async_trait::async_trait;
use teloxide::prelude::*;

use crate::error::DeliveryError;

/// Delivers a text message to a chat.
///
/// Callers treat delivery as best effort: a failure is logged and the caller
/// carries on.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send `text` to `user_id`.
    async fn notify(&self, user_id: i64, text: &str) -> Result<(), DeliveryError>;
}

/// Sends plain-text messages through the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramNotifier {
    bot: Bot,
}

impl TelegramNotifier {
    /// Wraps an existing bot handle.
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, user_id: i64, text: &str) -> Result<(), DeliveryError> {
        self.bot.send_message(ChatId(user_id), text).await?;
        Ok(())
    }
}
