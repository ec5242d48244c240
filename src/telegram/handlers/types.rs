//! Handler types and dependencies

use std::sync::Arc;

use crate::core::config;
use crate::sessions::SessionTable;
use crate::storage::{SubscriberStore, TeamStore};

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub teams: Arc<TeamStore>,
    pub subscribers: Arc<SubscriberStore>,
    pub sessions: Arc<SessionTable>,
}

impl HandlerDeps {
    pub fn new(teams: Arc<TeamStore>, subscribers: Arc<SubscriberStore>, sessions: Arc<SessionTable>) -> Self {
        Self {
            teams,
            subscribers,
            sessions,
        }
    }

    /// Builds the dependency set from the configured document paths.
    pub fn from_config() -> Self {
        Self::new(
            Arc::new(TeamStore::new(config::REGISTRATIONS_FILE.as_str())),
            Arc::new(SubscriberStore::new(config::SUBSCRIBERS_FILE.as_str())),
            Arc::new(SessionTable::new()),
        )
    }
}
