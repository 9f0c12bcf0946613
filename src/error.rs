//! Error types shared by the store, the scanner and the command surface.

use std::path::PathBuf;

/// Errors returned by the subscription store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file is missing, unreadable or not a valid document.
    #[error("subscription store unavailable at {path}: {reason}")]
    Unavailable {
        /// Location of the backing file.
        path: PathBuf,
        /// What went wrong while reading it.
        reason: String,
    },
    /// The collection could not be written back to disk.
    #[error("failed to persist subscriptions to {path}: {reason}")]
    Persistence {
        /// Location of the backing file.
        path: PathBuf,
        /// What went wrong while writing it.
        reason: String,
    },
}

/// A message could not be delivered to a subscriber.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The chat transport rejected the request.
    #[error("telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),
    /// Anything else reported by a notifier implementation.
    #[error("delivery failed: {0}")]
    Other(String),
}

/// The station suggestion upstream failed.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// Transport or decoding error from the HTTP client.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// The upstream answered with a non-success status.
    #[error("upstream returned status {0}")]
    Status(u16),
}

/// Malformed `/subscribe` arguments.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The text did not split into exactly four comma-separated fields.
    #[error("expected 4 comma-separated fields, got {0}")]
    FieldCount(usize),
    /// One of the fields was blank after trimming.
    #[error("field '{0}' cannot be empty")]
    EmptyField(&'static str),
}
