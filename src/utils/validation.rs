use crate::error::ParseError;

/// Trimmed fields of a `/subscribe` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionArgs {
    /// Departure station.
    pub origin: String,
    /// Arrival station.
    pub destination: String,
    /// Travel date, verbatim.
    pub date: String,
    /// Seat class, verbatim.
    pub place_type: String,
}

const FIELD_NAMES: [&str; 4] = ["origin", "destination", "date", "place type"];

/// Splits `origin, destination, date, placeType` into its four fields.
///
/// Exactly four comma-separated fields are required and none may be blank.
/// No other checks are made; dates and classes are kept as typed.
pub fn parse_subscription_args(input: &str) -> Result<SubscriptionArgs, ParseError> {
    let fields: Vec<&str> = input.split(',').map(str::trim).collect();

    // A lone empty string means nothing was typed at all.
    let count = if fields.len() == 1 && fields[0].is_empty() { 0 } else { fields.len() };
    if count != FIELD_NAMES.len() {
        return Err(ParseError::FieldCount(count));
    }

    if let Some((_, name)) = fields.iter().zip(FIELD_NAMES).find(|(f, _)| f.is_empty()) {
        return Err(ParseError::EmptyField(name));
    }

    Ok(SubscriptionArgs {
        origin: fields[0].to_string(),
        destination: fields[1].to_string(),
        date: fields[2].to_string(),
        place_type: fields[3].to_string(),
    })
}

/// Normalises the text passed to `/from`. Returns `None` when it is blank.
pub fn normalize_station_prefix(input: &str) -> Option<String> {
    let prefix = input.trim();
    if prefix.is_empty() {
        None
    } else {
        Some(prefix.to_string())
    }
}
