use teloxide::prelude::*;
use crate::bot::handlers::message::sender_label;
use crate::database::{models::SubscriptionRecord, store::SubscriptionStore};
use crate::error::{ParseError, StoreError};
use crate::utils::{
    feedback::{validation_message, CommandFeedback, FeedbackType},
    logging::{log_command_error, log_command_start, log_command_success, log_validation_error},
    validation::parse_subscription_args,
};

const USAGE_HINT: &str = "Use /subscribe origin, destination, date, place type\n\
    Example: /subscribe Moscow, Kazan, 2024-05-01, seat";

/// Why a `/subscribe` request produced no record
#[derive(Debug, thiserror::Error)]
pub enum SubscribeError {
    #[error("invalid subscription: {0}")]
    Invalid(#[from] ParseError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Parses `args` and appends the resulting record for `chat_id`.
///
/// Malformed input leaves the store untouched.
pub async fn subscribe_from_text(
    store: &SubscriptionStore,
    chat_id: i64,
    args: &str,
) -> Result<SubscriptionRecord, SubscribeError> {
    let parsed = parse_subscription_args(args)?;
    let record = SubscriptionRecord::new(
        chat_id,
        parsed.origin,
        parsed.destination,
        parsed.date,
        parsed.place_type,
    );
    store.append(record.clone()).await?;
    Ok(record)
}

/// Reply kind and text for the outcome of a `/subscribe` request
pub fn subscribe_reply(
    outcome: &Result<SubscriptionRecord, SubscribeError>,
) -> (FeedbackType, String) {
    match outcome {
        Ok(record) => (
            FeedbackType::Success,
            format!("Subscription created: {}", record.route_summary()),
        ),
        Err(SubscribeError::Invalid(e)) => (
            FeedbackType::Error,
            validation_message(&format!("Could not read subscription: {e}"), USAGE_HINT),
        ),
        Err(SubscribeError::Store(_)) => (
            FeedbackType::Error,
            "Failed to save your subscription. Please try again later.".to_string(),
        ),
    }
}

pub async fn handle_subscribe(
    bot: Bot,
    msg: Message,
    args: String,
    store: &SubscriptionStore,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id.0;
    let user = sender_label(&msg);
    let feedback = CommandFeedback::new(bot, msg.chat.id);

    log_command_start("/subscribe", &user, chat_id, Some(&args));

    let outcome = subscribe_from_text(store, chat_id, &args).await;
    match &outcome {
        Ok(record) => {
            log_command_success("/subscribe", &user, chat_id, Some(&record.route_summary()));
        }
        Err(SubscribeError::Invalid(e)) => {
            log_validation_error("/subscribe", &args, &e.to_string(), chat_id);
        }
        Err(SubscribeError::Store(e)) => {
            log_command_error("/subscribe", &user, chat_id, &e.to_string());
        }
    }

    let (feedback_type, text) = subscribe_reply(&outcome);
    feedback.send(feedback_type, &text).await?;

    Ok(())
}
