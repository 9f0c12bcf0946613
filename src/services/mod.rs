pub mod health;
pub mod notifier;
pub mod scanner;
pub mod suggest;
pub mod web;
