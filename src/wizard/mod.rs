//! The linear registration wizard
//!
//! `steps` holds the ordered question table, `session` the generic state
//! machine that consumes it.

pub mod session;
pub mod steps;

// Re-exports for convenience
pub use session::{Advance, WizardSession};
pub use steps::{CONFIRM_BUTTON, DECLINE_BUTTON, REGISTRATION_INTRO, STEPS};
