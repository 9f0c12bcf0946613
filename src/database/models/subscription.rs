use serde::{Deserialize, Serialize};

/// A user's standing request to hear about seats on one route and date.
///
/// Field names on the wire match the web form payload and the persisted
/// document: `chat_id`, `from`, `to`, `date`, `placeType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    /// Telegram chat that receives the notifications.
    #[serde(rename = "chat_id")]
    pub user_id: i64,
    /// Departure station or area, as typed.
    #[serde(rename = "from")]
    pub origin: String,
    /// Arrival station or area, as typed.
    #[serde(rename = "to")]
    pub destination: String,
    /// Travel date, stored verbatim.
    pub date: String,
    /// Seat or carriage class, stored verbatim.
    #[serde(rename = "placeType")]
    pub place_type: String,
}

impl SubscriptionRecord {
    /// Builds a record from already-trimmed fields.
    pub fn new(
        user_id: i64,
        origin: impl Into<String>,
        destination: impl Into<String>,
        date: impl Into<String>,
        place_type: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            origin: origin.into(),
            destination: destination.into(),
            date: date.into(),
            place_type: place_type.into(),
        }
    }

    /// One-line route summary, e.g. `Moscow → Kazan on 2024-05-01 (seat)`.
    pub fn route_summary(&self) -> String {
        format!(
            "{} → {} on {} ({})",
            self.origin, self.destination, self.date, self.place_type
        )
    }
}

/// On-disk document holding every subscription.
///
/// Missing keys fall back to their defaults, so an empty `{}` file loads as an
/// empty collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDocument {
    /// Records in insertion order.
    #[serde(default)]
    pub subscriptions: Vec<SubscriptionRecord>,
}
