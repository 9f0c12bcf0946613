//! # Seat Alert Bot Main Entry Point
//!
//! Initializes logging, loads configuration, opens the subscription store,
//! starts the availability scanner, and runs the Telegram bot next to the
//! HTTP server.

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seat_alert_bot::bot::handlers::{BotContext, BotHandler};
use seat_alert_bot::config::Config;
use seat_alert_bot::database::store::SubscriptionStore;
use seat_alert_bot::services::notifier::TelegramNotifier;
use seat_alert_bot::services::scanner::{RandomAvailability, ScannerService};
use seat_alert_bot::services::suggest::YandexSuggester;
use seat_alert_bot::services::web::WebService;
use seat_alert_bot::utils::logging::log_system_event;

const SUGGEST_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seat_alert_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Seat Alert Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Store: {}, HTTP Port: {}, Scan: '{}'",
        config.store_path.display(),
        config.http_port,
        config.scan_schedule
    );

    // Open the subscription store
    let store = Arc::new(SubscriptionStore::open(&config.store_path).await?);
    info!("Subscription store ready with {} subscriptions", store.len().await);

    // Initialize bot
    let bot = Bot::new(&config.telegram_bot_token);
    let suggester = YandexSuggester::new(config.suggest_url.clone(), SUGGEST_TIMEOUT)?;
    let handler = BotHandler::new(BotContext {
        store: store.clone(),
        suggester: Arc::new(suggester),
        webapp_url: config.webapp_url.clone(),
    });
    info!("Telegram bot initialized successfully");

    // Initialize and start the availability scanner
    let mut scanner = ScannerService::new(
        store.clone(),
        Arc::new(RandomAvailability::new(config.notify_probability)),
        Arc::new(TelegramNotifier::new(bot.clone())),
        config.notify_timeout,
    )
    .await
    .map_err(|e| anyhow::anyhow!("Failed to create availability scanner: {}", e))?;

    if let Err(e) = scanner.start(&config.scan_schedule).await {
        tracing::error!("Failed to start availability scanner: {}", e);
    }

    // HTTP server: subscription form, listing API, static pages, health
    let web = WebService::new(store.clone(), &config.static_dir);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Web app running on http://localhost:{}", config.http_port);

    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, handler.schema())
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let web_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, web.router).await {
            tracing::error!("HTTP server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result = bot_task => {
            if let Err(e) = result {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result = web_task => {
            if let Err(e) = result {
                tracing::error!("HTTP task error: {}", e);
            }
        }
    }

    if let Err(e) = scanner.stop().await {
        tracing::warn!("Error stopping availability scanner: {}", e);
    }

    if let Err(e) = store.flush().await {
        tracing::error!("Final store flush failed: {}", e);
    }

    log_system_event("shutdown", Some("application stopped"));
    Ok(())
}
