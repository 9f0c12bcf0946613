//! Station name suggestions from the Yandex Rasp suggest service.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::error::LookupError;

/// Maximum number of names returned to the user.
pub const MAX_SUGGESTIONS: usize = 5;

/// Looks up station names that start with a prefix.
#[async_trait]
pub trait StationSuggester: Send + Sync {
    /// Up to [`MAX_SUGGESTIONS`] display names for `prefix`.
    async fn suggest(&self, prefix: &str) -> Result<Vec<String>, LookupError>;
}

#[derive(Debug, Default, Deserialize)]
struct SuggestResponse {
    #[serde(default)]
    segments: Vec<Segment>,
}

#[derive(Debug, Deserialize)]
struct Segment {
    title: String,
}

/// HTTP client for the `all_suggests` endpoint.
#[derive(Clone)]
pub struct YandexSuggester {
    client: reqwest::Client,
    base_url: String,
}

impl YandexSuggester {
    /// Creates a client for `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl StationSuggester for YandexSuggester {
    async fn suggest(&self, prefix: &str) -> Result<Vec<String>, LookupError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("format", "json"), ("part", prefix)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body: SuggestResponse = response.json().await?;
        Ok(body
            .segments
            .into_iter()
            .map(|s| s.title)
            .take(MAX_SUGGESTIONS)
            .collect())
    }
}

/// Reply text for a finished lookup.
pub fn format_suggestions(stations: &[String]) -> String {
    if stations.is_empty() {
        "Sorry, no stations match that name.".to_string()
    } else {
        format!("Matching stations:\n{}", stations.join("\n"))
    }
}
