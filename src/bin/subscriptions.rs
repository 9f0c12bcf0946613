use anyhow::{anyhow, Result};
use seat_alert_bot::database::store::SubscriptionStore;
use std::env;
use std::io;
use std::path::{Path, PathBuf};

const DEFAULT_STORE_PATH: &str = "./data/db.json";

#[tokio::main]
async fn main() -> Result<()> {
    // Store warnings go to stderr, filtered by RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("check");

    match command {
        "check" => check_store().await,
        "list" => list_subscriptions().await,
        "reset" => reset_store().await,
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            print_help();
            std::process::exit(1);
        }
    }
}

/// The tool only needs the store location, so the bot token is not required
fn store_path() -> PathBuf {
    dotenvy::dotenv().ok();
    env::var("STORE_PATH")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_STORE_PATH.to_string())
        .into()
}

async fn check_store() -> Result<()> {
    let path = store_path();
    println!("🔍 Checking subscription store {}", mask_path(&path));

    if !path.exists() {
        println!("⚠️  Store file does not exist yet");
        println!("💡 It is created on the first bot start, or run 'subscriptions reset'");
        return Ok(());
    }

    let store = SubscriptionStore::open(&path).await?;
    match store.load().await {
        Ok(records) => {
            println!("✅ Store is readable");
            println!("📋 {} subscriptions", records.len());
        }
        Err(e) => {
            println!("❌ Store is unreadable: {e}");
            println!("💡 Fix the file by hand or run 'subscriptions reset'");
        }
    }

    Ok(())
}

async fn list_subscriptions() -> Result<()> {
    list_subscriptions_at(&store_path()).await
}

/// Prints the store at `path` without creating it when missing
async fn list_subscriptions_at(path: &Path) -> Result<()> {
    if !path.exists() {
        println!("No store file at {}", mask_path(path));
        return Ok(());
    }

    let store = SubscriptionStore::open(path).await?;
    let records = store
        .load()
        .await
        .map_err(|e| anyhow!("Cannot list subscriptions: {}", e))?;

    if records.is_empty() {
        println!("No subscriptions in {}", mask_path(path));
        return Ok(());
    }

    for (i, record) in records.iter().enumerate() {
        println!("{:>4}. chat {:<14} {}", i + 1, record.user_id, record.route_summary());
    }
    Ok(())
}

async fn reset_store() -> Result<()> {
    println!("⚠️  WARNING: This will delete ALL subscriptions!");
    println!("🤔 Are you sure you want to continue? (yes/no)");

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    if input.trim().to_lowercase() != "yes" {
        println!("❌ Reset cancelled.");
        return Ok(());
    }

    let path = store_path();
    if path.exists() {
        std::fs::remove_file(&path)?;
        println!("🗑️  Deleted store file: {}", path.display());
    }

    // Opening a missing store writes an empty document
    SubscriptionStore::open(&path).await?;
    println!("✅ Store reset completed!");

    Ok(())
}

fn mask_path(path: &Path) -> String {
    match path.file_name() {
        Some(name) => format!(".../{}", name.to_string_lossy()),
        None => path.display().to_string(),
    }
}

fn print_help() {
    println!("🚆 Seat Alert Bot - Subscription Store Tool");
    println!();
    println!("USAGE:");
    println!("    subscriptions [COMMAND]");
    println!();
    println!("COMMANDS:");
    println!("    check          Check that the store file is readable (default)");
    println!("    list           Print every subscription");
    println!("    reset          Delete all subscriptions - DESTRUCTIVE!");
    println!("    help           Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    STORE_PATH     Store file location (default: ./data/db.json)");
    println!();
}
