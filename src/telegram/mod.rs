//! Telegram bot integration and handlers

pub mod admin;
pub mod bot;
pub mod broadcast;
pub mod handlers;
pub mod menu;
pub mod notifications;
pub mod registration;

// Re-exports for convenience
pub use bot::{Command, create_bot, setup_bot_commands};
pub use handlers::{HandlerDeps, HandlerError, schema};
