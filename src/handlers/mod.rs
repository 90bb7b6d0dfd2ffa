//! Bot handlers module
//!
//! Transport-independent handling of one incoming text event:
//! - Command handlers for bot commands
//! - Dialog handlers for multi-step conversations
//! - Message routing between the two
//!
//! Every handler returns the reply texts for the user; sending them is left
//! to the transport.

pub mod commands;
pub mod dialog;
pub mod messages;

use std::sync::Arc;
use chrono::Duration;

use crate::config::Settings;
use crate::i18n::I18n;
use crate::services::ServiceFactory;
use crate::state::SessionStore;
use crate::utils::errors::HealthBuddyError;

pub use commands::{parse_command, Command};
pub use messages::handle_text;

/// Reply texts produced by one event, in sending order
pub type Replies = Vec<String>;

/// Everything a handler needs
#[derive(Clone)]
pub struct HandlerContext {
    pub store: SessionStore,
    pub services: ServiceFactory,
    pub i18n: Arc<I18n>,
    /// Dialogs older than this are dropped on the next message
    pub conversation_timeout: Duration,
    /// Bot username for `/command@username` mentions; empty accepts any
    pub bot_username: String,
}

impl HandlerContext {
    /// Build the handler context from loaded settings
    pub fn new(settings: &Settings, services: ServiceFactory, i18n: I18n, store: SessionStore) -> Self {
        let timeout = std::time::Duration::from_secs(settings.conversation.timeout_seconds);

        Self {
            store,
            services,
            i18n: Arc::new(i18n),
            conversation_timeout: Duration::from_std(timeout).unwrap_or_else(|_| Duration::weeks(52)),
            bot_username: String::new(),
        }
    }

    /// Set the bot username used when matching command mentions
    pub fn with_bot_username(mut self, username: impl Into<String>) -> Self {
        self.bot_username = username.into();
        self
    }

    /// Translate a key without parameters
    pub fn t(&self, key: &str, lang: &str) -> String {
        self.i18n.t(key, lang, None)
    }

    /// Translate a key with `name=value` parameters
    pub fn tf(&self, key: &str, lang: &str, params: &[(&str, String)]) -> String {
        self.i18n.tf(key, lang, params)
    }
}

/// Reply text for an error that is answered instead of propagated
pub fn error_reply(ctx: &HandlerContext, error: &HealthBuddyError, lang: &str) -> Option<String> {
    let text = match error {
        HealthBuddyError::UserNotFound { .. } => ctx.t("errors.user_not_found", lang),
        HealthBuddyError::InvalidArgument(usage_key) => ctx.t(usage_key, lang),
        HealthBuddyError::UnknownWorkout(_) => ctx.t("workout.unknown", lang),
        HealthBuddyError::Lookup(_) => ctx.t("errors.lookup_failed", lang),
        _ => return None,
    };
    Some(text)
}
