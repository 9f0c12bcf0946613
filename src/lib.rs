//! # Seat Alert Bot
//!
//! A Telegram bot that watches train routes for free seats on behalf of its
//! subscribers.
//!
//! ## Features
//! - Subscribe from chat (`/subscribe`) or from the web form (`POST /subscribe`)
//! - Station name suggestions (`/from`)
//! - Periodic availability scan that notifies subscribers
//! - Subscriptions persisted to a single JSON file

/// Bot command handlers and message processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Subscription records and the file-backed store
pub mod database;
/// Error types for the store, delivery and lookups
pub mod error;
/// Background scan, notifications, station lookup and the HTTP surface
pub mod services;
/// Utility functions for validation, logging and reply formatting
pub mod utils;
