//! Persistence for registrations and subscribers

pub mod store;

// Re-exports for convenience
pub use store::{SubscriberStore, TeamStore};
