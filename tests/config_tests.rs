use seat_alert_bot::config::Config;
use std::env;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

const ALL_VARS: &[&str] = &[
    "TELEGRAM_BOT_TOKEN",
    "STORE_PATH",
    "HTTP_PORT",
    "STATIC_DIR",
    "WEBAPP_URL",
    "SCAN_SCHEDULE",
    "NOTIFY_PROBABILITY",
    "NOTIFY_TIMEOUT_SECS",
    "SUGGEST_URL",
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("STORE_PATH", "/tmp/subs.json");
    env::set_var("HTTP_PORT", "8080");
    env::set_var("STATIC_DIR", "web");
    env::set_var("WEBAPP_URL", "https://example.org/app");
    env::set_var("SCAN_SCHEDULE", "0 * * * * *");
    env::set_var("NOTIFY_PROBABILITY", "0.75");
    env::set_var("NOTIFY_TIMEOUT_SECS", "3");
    env::set_var("SUGGEST_URL", "http://localhost:9000/suggest");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(config.store_path, PathBuf::from("/tmp/subs.json"));
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.static_dir, PathBuf::from("web"));
    assert_eq!(config.webapp_url.unwrap().as_str(), "https://example.org/app");
    assert_eq!(config.scan_schedule, "0 * * * * *");
    assert_eq!(config.notify_probability, 0.75);
    assert_eq!(config.notify_timeout, Duration::from_secs(3));
    assert_eq!(config.suggest_url, "http://localhost:9000/suggest");

    clear_env();
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    // Only set required token, let others use defaults
    env::set_var("TELEGRAM_BOT_TOKEN", "required_token");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "required_token");
    assert_eq!(config.store_path, PathBuf::from("./data/db.json"));
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.static_dir, PathBuf::from("public"));
    assert!(config.webapp_url.is_none());
    assert_eq!(config.scan_schedule, "0 */5 * * * *");
    assert_eq!(config.notify_probability, 0.3);
    assert_eq!(config.notify_timeout, Duration::from_secs(10));
    assert_eq!(config.suggest_url, "https://suggests.rasp.yandex.net/all_suggests");

    clear_env();
}

#[test]
fn test_config_missing_required_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("TELEGRAM_BOT_TOKEN must be set"));
}

#[test]
fn test_config_blank_token_is_missing() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "   ");

    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("TELEGRAM_BOT_TOKEN must be set"));

    clear_env();
}

#[test]
fn test_config_invalid_port() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("HTTP_PORT", "invalid_port");

    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("Invalid HTTP_PORT"));

    clear_env();
}

#[test]
fn test_config_probability_out_of_range() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");

    for bad in ["1.5", "-0.1", "often"] {
        env::set_var("NOTIFY_PROBABILITY", bad);
        let error_msg = Config::from_env().unwrap_err().to_string();
        assert!(error_msg.contains("Invalid NOTIFY_PROBABILITY"), "accepted {bad}");
    }

    clear_env();
}

#[test]
fn test_config_invalid_webapp_url() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("WEBAPP_URL", "not a url");

    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("Invalid WEBAPP_URL"));

    clear_env();
}
