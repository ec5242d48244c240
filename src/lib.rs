//! Turnir - Telegram bot for CS2 tournament team registration
//!
//! This library provides all the functionality for the bot: the
//! registration wizard, the admin panel with its edit sub-flow, the
//! whole-document record stores, and the Telegram handler tree.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging, validation, domain types
//! - `storage`: the registrations and subscribers JSON documents
//! - `wizard`: the linear registration state machine (pure, no transport)
//! - `sessions`: per-operator ephemeral sessions and free-text arbitration
//! - `telegram`: teloxide integration and handlers

pub mod cli;
pub mod core;
pub mod sessions;
pub mod storage;
pub mod telegram;
pub mod wizard;

// Re-export commonly used types for convenience
pub use crate::core::{AppError, AppResult, config};
pub use crate::sessions::SessionTable;
pub use crate::storage::{SubscriberStore, TeamStore};
pub use crate::telegram::{HandlerDeps, schema};
