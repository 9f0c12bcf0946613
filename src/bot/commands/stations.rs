use teloxide::prelude::*;
use crate::bot::handlers::message::sender_label;
use crate::services::suggest::{format_suggestions, StationSuggester};
use crate::utils::{
    feedback::{CommandFeedback, FeedbackType},
    logging::{log_command_error, log_command_start, log_command_success},
    validation::normalize_station_prefix,
};

/// Answers `/from <prefix>` with up to five matching station names.
///
/// Lookup failures are reported to the user, never propagated.
pub async fn handle_stations(
    bot: Bot,
    msg: Message,
    prefix: String,
    suggester: &dyn StationSuggester,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id.0;
    let user = sender_label(&msg);
    let feedback = CommandFeedback::new(bot, msg.chat.id);

    let Some(prefix) = normalize_station_prefix(&prefix) else {
        feedback
            .validation_error("Station name is missing", "Type the start of a name, e.g. /from Mosc")
            .await?;
        return Ok(());
    };

    log_command_start("/from", &user, chat_id, Some(&prefix));
    let processing = feedback.send_processing("Looking up stations...").await?;

    match suggester.suggest(&prefix).await {
        Ok(stations) => {
            let kind = if stations.is_empty() { FeedbackType::Info } else { FeedbackType::Success };
            feedback
                .update_message(processing.id, kind, &format_suggestions(&stations))
                .await?;
            log_command_success("/from", &user, chat_id, Some(&format!("{} matches", stations.len())));
        }
        Err(e) => {
            log_command_error("/from", &user, chat_id, &e.to_string());
            feedback
                .update_message(
                    processing.id,
                    FeedbackType::Warning,
                    "Sorry, station lookup is unavailable right now. Please try again later.",
                )
                .await?;
        }
    }

    Ok(())
}
