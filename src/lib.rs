//! HealthBuddy Telegram Bot
//!
//! A Telegram bot that tracks water, food and workouts against daily goals.
//! This library provides the profile dialog, the goal calculator, the
//! in-memory session store and the weather and nutrition lookups, with
//! multi-language replies.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod state;
pub mod i18n;
pub mod utils;
pub mod middleware;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{HealthBuddyError, Result};

// Re-export main components for easy access
pub use handlers::{handle_text, HandlerContext};
pub use services::ServiceFactory;
pub use state::SessionStore;
pub use i18n::I18n;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
