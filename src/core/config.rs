//! Configuration constants for the bot
//!
//! Everything is read once at startup from environment variables into
//! `Lazy` statics. `BOT_TOKEN` itself is consumed by `Bot::from_env`.

use once_cell::sync::Lazy;
use std::env;

/// Path of the registrations document
/// Read from REGISTRATIONS_FILE environment variable
pub static REGISTRATIONS_FILE: Lazy<String> =
    Lazy::new(|| env::var("REGISTRATIONS_FILE").unwrap_or_else(|_| "registrations.json".to_string()));

/// Path of the subscribers document
/// Read from SUBSCRIBERS_FILE environment variable
pub static SUBSCRIBERS_FILE: Lazy<String> =
    Lazy::new(|| env::var("SUBSCRIBERS_FILE").unwrap_or_else(|_| "subscribers.json".to_string()));

/// Log file path
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "turnir.log".to_string()));

/// Invite link to the tournament group, shown in menus and after registration
/// Read from GROUP_LINK environment variable
pub static GROUP_LINK: Lazy<String> = Lazy::new(|| env::var("GROUP_LINK").unwrap_or_else(|_| String::new()));

/// Announcement channel link, used only in message text
/// Read from CHANNEL_LINK environment variable
pub static CHANNEL_LINK: Lazy<String> = Lazy::new(|| env::var("CHANNEL_LINK").unwrap_or_else(|_| String::new()));

/// Admin configuration
pub mod admin {
    use once_cell::sync::Lazy;
    use std::env;

    pub(super) fn parse_admin_ids(raw: &str) -> Vec<i64> {
        raw.split([',', ' ', '\n', '\t'])
            .filter_map(|part| part.trim().parse::<i64>().ok())
            .collect()
    }

    /// Admin user IDs (comma-separated)
    /// Read from ADMIN_IDS environment variable, with ADMIN_ID accepted as
    /// a single-entry fallback
    pub static ADMIN_IDS: Lazy<Vec<i64>> = Lazy::new(|| {
        env::var("ADMIN_IDS")
            .or_else(|_| env::var("ADMIN_ID"))
            .ok()
            .map(|raw| parse_admin_ids(&raw))
            .unwrap_or_default()
    });
}
