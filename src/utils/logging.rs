use tracing::{error, info, warn, debug};

/// Logs command start with consistent format
pub fn log_command_start(command: &str, user: &str, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!("CMD_START: {} by {} in chat {} - {}", command, user, chat_id, d),
        None => info!("CMD_START: {} by {} in chat {}", command, user, chat_id),
    }
}

/// Logs command completion with consistent format
pub fn log_command_success(command: &str, user: &str, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!("CMD_SUCCESS: {} by {} in chat {} - {}", command, user, chat_id, d),
        None => info!("CMD_SUCCESS: {} by {} in chat {}", command, user, chat_id),
    }
}

/// Logs command errors with consistent format
pub fn log_command_error(command: &str, user: &str, chat_id: i64, error: &str) {
    error!("CMD_ERROR: {} by {} in chat {} - {}", command, user, chat_id, error);
}

/// Logs validation errors with consistent format
pub fn log_validation_error(command: &str, value: &str, error: &str, chat_id: i64) {
    warn!(
        "VALIDATION_ERROR: {} - input '{}' rejected: {} - chat {}",
        command, value, error, chat_id
    );
}

/// Logs store operations with consistent format
pub fn log_store_operation(operation: &str, details: Option<&str>) {
    match details {
        Some(d) => debug!("STORE_OP: {} - {}", operation, d),
        None => debug!("STORE_OP: {}", operation),
    }
}

/// Logs store errors with consistent format
pub fn log_store_error(operation: &str, error: &str) {
    error!("STORE_ERROR: {} failed: {}", operation, error);
}

/// Logs a notification that could not be delivered
pub fn log_delivery_error(chat_id: i64, error: &str) {
    warn!("DELIVERY_ERROR: chat {} - {}", chat_id, error);
}

/// Logs timeout events with consistent format
pub fn log_timeout(operation: &str, duration_secs: u64, details: Option<&str>) {
    match details {
        Some(d) => warn!("TIMEOUT: {} after {}s - {}", operation, duration_secs, d),
        None => warn!("TIMEOUT: {} after {}s", operation, duration_secs),
    }
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
