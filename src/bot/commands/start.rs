use teloxide::prelude::*;
use teloxide::types::{ButtonRequest, KeyboardButton, KeyboardMarkup, WebAppInfo};
use crate::utils::logging::log_command_success;
use crate::bot::handlers::message::sender_label;

const WELCOME_TEXT: &str = "🚆 Welcome to Seat Alert Bot!\n\n\
    Subscribe with /subscribe origin, destination, date, place type\n\
    Find station names with /from <name>\n\
    Use /help to see all commands.";

/// Reply keyboard with a single button that opens the subscription web app
pub fn webapp_keyboard(url: &reqwest::Url) -> KeyboardMarkup {
    let button = KeyboardButton::new("🚆 Subscribe")
        .request(ButtonRequest::WebApp(WebAppInfo { url: url.clone() }));
    KeyboardMarkup::new(vec![vec![button]]).resize_keyboard(true)
}

pub async fn handle_start(
    bot: Bot,
    msg: Message,
    webapp_url: Option<&reqwest::Url>,
) -> ResponseResult<()> {
    match webapp_url {
        Some(url) => {
            bot.send_message(msg.chat.id, format!("{WELCOME_TEXT}\n\nOr open the web app to subscribe:"))
                .reply_markup(webapp_keyboard(url))
                .await?;
        }
        None => {
            bot.send_message(msg.chat.id, WELCOME_TEXT).await?;
        }
    }

    log_command_success("/start", &sender_label(&msg), msg.chat.id.0, None);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webapp_keyboard_has_one_button() {
        let url = reqwest::Url::parse("https://example.org/app").unwrap();
        let keyboard = webapp_keyboard(&url);

        assert_eq!(keyboard.keyboard.len(), 1);
        assert_eq!(keyboard.keyboard[0].len(), 1);
        assert_eq!(keyboard.keyboard[0][0].text, "🚆 Subscribe");
        assert!(matches!(
            &keyboard.keyboard[0][0].request,
            Some(ButtonRequest::WebApp(info)) if info.url == url
        ));
    }
}
