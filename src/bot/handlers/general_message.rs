use teloxide::prelude::*;
use crate::bot::handlers::HandlerResult;
use crate::utils::feedback::CommandFeedback;

/// Hint for text that is not a recognised command, or `None` to stay quiet
pub fn general_reply(text: &str) -> Option<(String, Option<&'static str>)> {
    let lower = text.to_lowercase();

    if text.starts_with('/') {
        let command = text.split_whitespace().next().unwrap_or(text);
        Some((
            format!("Unknown command or missing arguments: {command}"),
            Some("Use /help to see all available commands, or check your command syntax."),
        ))
    } else if lower.contains("subscribe") || lower.contains("train") {
        Some((
            "Looking to track seats? Try:\n/subscribe Moscow, Kazan, 2024-05-01, seat".to_string(),
            None,
        ))
    } else if lower.contains("help") {
        Some(("Use /help to see all available commands and examples!".to_string(), None))
    } else {
        // Anything else is ignored to avoid spam
        None
    }
}

pub async fn handle_general_message(bot: Bot, msg: Message) -> HandlerResult {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let feedback = CommandFeedback::new(bot, msg.chat.id);
    match general_reply(text) {
        Some((error, Some(suggestion))) => {
            feedback.validation_error(&error, suggestion).await?;
        }
        Some((info, None)) => {
            feedback.info(&info).await?;
        }
        None => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_command_gets_suggestion() {
        let (error, suggestion) = general_reply("/unsubscribe all").unwrap();
        assert!(error.contains("/unsubscribe"));
        assert!(suggestion.is_some());
    }

    #[test]
    fn test_keyword_hints() {
        let (text, suggestion) = general_reply("how do I subscribe?").unwrap();
        assert!(text.contains("/subscribe"));
        assert!(suggestion.is_none());

        assert!(general_reply("I need help").is_some());
    }

    #[test]
    fn test_small_talk_is_ignored() {
        assert!(general_reply("hello there").is_none());
    }
}
