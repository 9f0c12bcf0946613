use teloxide::prelude::*;
use teloxide::types::{MessageId, ParseMode};
use crate::utils::markdown::escape_markdown;

/// Kinds of replies the bot sends back to a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackType {
    Success,
    Warning,
    Error,
    Info,
    Processing,
}

impl FeedbackType {
    fn emoji(self) -> &'static str {
        match self {
            FeedbackType::Success => "✅",
            FeedbackType::Warning => "⚠️",
            FeedbackType::Error => "❌",
            FeedbackType::Info => "ℹ️",
            FeedbackType::Processing => "⏳",
        }
    }

    /// Prefixes `message` with the emoji and escapes it for MarkdownV2
    pub fn format(self, message: &str) -> String {
        format!("{} {}", self.emoji(), escape_markdown(message))
    }
}

/// Builds the text of a rejected-input reply
pub fn validation_message(error: &str, suggestion: &str) -> String {
    format!("{error}\n\n💡 Suggestion: {suggestion}")
}

/// Sends formatted replies to a single chat
pub struct CommandFeedback {
    bot: Bot,
    chat_id: ChatId,
}

impl CommandFeedback {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }

    /// Send immediate feedback message
    pub async fn send(&self, feedback_type: FeedbackType, message: &str) -> ResponseResult<Message> {
        self.bot
            .send_message(self.chat_id, feedback_type.format(message))
            .parse_mode(ParseMode::MarkdownV2)
            .await
    }

    /// Send a processing message that can be updated later
    pub async fn send_processing(&self, message: &str) -> ResponseResult<Message> {
        self.send(FeedbackType::Processing, message).await
    }

    /// Replace the text of an earlier message
    pub async fn update_message(
        &self,
        message_id: MessageId,
        feedback_type: FeedbackType,
        message: &str,
    ) -> ResponseResult<Message> {
        self.bot
            .edit_message_text(self.chat_id, message_id, feedback_type.format(message))
            .parse_mode(ParseMode::MarkdownV2)
            .await
    }

    pub async fn success(&self, message: &str) -> ResponseResult<Message> {
        self.send(FeedbackType::Success, message).await
    }

    pub async fn error(&self, message: &str) -> ResponseResult<Message> {
        self.send(FeedbackType::Error, message).await
    }

    pub async fn info(&self, message: &str) -> ResponseResult<Message> {
        self.send(FeedbackType::Info, message).await
    }

    /// Send validation error with helpful suggestion
    pub async fn validation_error(&self, error: &str, suggestion: &str) -> ResponseResult<Message> {
        self.send(FeedbackType::Error, &validation_message(error, suggestion)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_format_escapes_text() {
        assert_eq!(
            FeedbackType::Success.format("Subscription created: A → B on 1.05 (seat)"),
            "✅ Subscription created: A → B on 1\\.05 \\(seat\\)"
        );
        assert_eq!(FeedbackType::Warning.format("careful"), "⚠️ careful");
        assert_eq!(FeedbackType::Processing.format("wait"), "⏳ wait");
    }

    #[test]
    fn test_validation_message_layout() {
        let text = validation_message("Bad input", "Try again");
        assert_eq!(text, "Bad input\n\n💡 Suggestion: Try again");
    }
}
