use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::services::scanner::DEFAULT_NOTIFY_PROBABILITY;

const DEFAULT_STORE_PATH: &str = "./data/db.json";
const DEFAULT_STATIC_DIR: &str = "public";
const DEFAULT_SCAN_SCHEDULE: &str = "0 */5 * * * *";
const DEFAULT_SUGGEST_URL: &str = "https://suggests.rasp.yandex.net/all_suggests";

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub store_path: PathBuf,
    pub http_port: u16,
    pub static_dir: PathBuf,
    pub webapp_url: Option<reqwest::Url>,
    pub scan_schedule: String,
    pub notify_probability: f64,
    pub notify_timeout: Duration,
    pub suggest_url: String,
}

/// Reads `key`, treating unset and blank values alike
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = non_empty_var("TELEGRAM_BOT_TOKEN")
            .ok_or_else(|| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        let store_path = non_empty_var("STORE_PATH")
            .unwrap_or_else(|| DEFAULT_STORE_PATH.to_string())
            .into();

        let http_port = non_empty_var("HTTP_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let static_dir = non_empty_var("STATIC_DIR")
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
            .into();

        let webapp_url = non_empty_var("WEBAPP_URL")
            .map(|raw| reqwest::Url::parse(&raw).map_err(|_| anyhow!("Invalid WEBAPP_URL")))
            .transpose()?;

        let scan_schedule = non_empty_var("SCAN_SCHEDULE")
            .unwrap_or_else(|| DEFAULT_SCAN_SCHEDULE.to_string());

        let notify_probability = match non_empty_var("NOTIFY_PROBABILITY") {
            Some(raw) => raw
                .parse::<f64>()
                .ok()
                .filter(|p| (0.0..=1.0).contains(p))
                .ok_or_else(|| anyhow!("Invalid NOTIFY_PROBABILITY"))?,
            None => DEFAULT_NOTIFY_PROBABILITY,
        };

        let notify_timeout_secs: u64 = non_empty_var("NOTIFY_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .map_err(|_| anyhow!("Invalid NOTIFY_TIMEOUT_SECS"))?;

        let suggest_url = non_empty_var("SUGGEST_URL")
            .unwrap_or_else(|| DEFAULT_SUGGEST_URL.to_string());

        Ok(Config {
            telegram_bot_token: token,
            store_path,
            http_port,
            static_dir,
            webapp_url,
            scan_schedule,
            notify_probability,
            notify_timeout: Duration::from_secs(notify_timeout_secs),
            suggest_url,
        })
    }
}
