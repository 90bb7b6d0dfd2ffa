//! Logging middleware
//!
//! Logs every incoming message before it reaches the handlers and measures
//! how long handling took.

use std::time::Instant;
use teloxide::types::{ChatKind, MediaKind, Message, MessageKind};
use tracing::{debug, error, info, warn, Span};
use serde_json::json;

/// Logging middleware for bot interactions
#[derive(Clone, Debug)]
pub struct LoggingMiddleware {
    log_user_interactions: bool,
    log_performance: bool,
}

impl LoggingMiddleware {
    /// Create a new LoggingMiddleware instance
    pub fn new(log_user_interactions: bool, log_performance: bool) -> Self {
        Self {
            log_user_interactions,
            log_performance,
        }
    }

    /// Log an incoming message
    pub fn log_message(&self, message: &Message) {
        if !self.log_user_interactions {
            return;
        }

        let user_info = message.from.as_ref().map(|user| {
            json!({
                "id": user.id.0,
                "username": user.username,
                "language_code": user.language_code,
            })
        });

        let chat_type = match message.chat.kind {
            ChatKind::Private(_) => "private",
            ChatKind::Public(_) => "public",
        };

        let message_type = match &message.kind {
            MessageKind::Common(common) => match &common.media_kind {
                MediaKind::Text(text) => {
                    debug!(user = ?user_info, text = %text.text, "Text message received");
                    "text"
                }
                MediaKind::Photo(_) => "photo",
                MediaKind::Sticker(_) => "sticker",
                MediaKind::Voice(_) => "voice",
                _ => "other_media",
            },
            _ => "other",
        };

        info!(
            user = ?user_info,
            chat_id = message.chat.id.0,
            chat_type = chat_type,
            message_type = message_type,
            message_id = message.id.0,
            "Message received"
        );
    }

    /// Log a handling failure
    pub fn log_error(&self, error: &dyn std::error::Error, context: &str, user_id: Option<i64>) {
        error!(
            error = %error,
            context = context,
            user_id = user_id,
            "Error occurred"
        );
    }

    /// Start timing an operation, if performance logging is enabled
    pub fn create_performance_span(&self, operation: &str) -> Option<PerformanceTracker> {
        if self.log_performance {
            Some(PerformanceTracker::new(operation.to_string()))
        } else {
            None
        }
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new(true, true)
    }
}

/// Performance tracker for measuring operation duration
pub struct PerformanceTracker {
    operation: String,
    start_time: Instant,
    _span: Span,
}

impl PerformanceTracker {
    fn new(operation: String) -> Self {
        let span = tracing::info_span!("performance", operation = %operation);

        Self {
            operation,
            start_time: Instant::now(),
            _span: span,
        }
    }

    /// Complete the performance tracking and log the result
    pub fn complete(self, success: bool) {
        let duration_ms = self.start_time.elapsed().as_millis();

        if success {
            debug!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation completed"
            );
        } else {
            warn!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation failed"
            );
        }

        // Lookups are bounded by their timeouts; anything slower is worth a look
        if duration_ms > 5000 {
            warn!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Slow operation detected"
            );
        }
    }
}
