//! Error handling for HealthBuddy
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for HealthBuddy application
#[derive(Error, Debug)]
pub enum HealthBuddyError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: i64 },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown workout: {0}")]
    UnknownWorkout(String),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Weather and nutrition lookup errors
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Lookup request failed: {0}")]
    RequestFailed(String),

    #[error("Lookup timeout")]
    Timeout,

    #[error("Invalid lookup response: {0}")]
    InvalidResponse(String),

    #[error("Lookup service unavailable")]
    ServiceUnavailable,
}

/// Result type alias for HealthBuddy operations
pub type Result<T> = std::result::Result<T, HealthBuddyError>;

/// Result type alias for lookup operations
pub type LookupResult<T> = std::result::Result<T, LookupError>;

impl From<config::ConfigError> for HealthBuddyError {
    fn from(e: config::ConfigError) -> Self {
        HealthBuddyError::Config(e.to_string())
    }
}

impl LookupError {
    /// Classify a transport-level reqwest failure
    pub fn from_request(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LookupError::Timeout
        } else if e.is_connect() {
            LookupError::ServiceUnavailable
        } else if e.is_decode() {
            LookupError::InvalidResponse(e.to_string())
        } else {
            LookupError::RequestFailed(e.to_string())
        }
    }
}

impl HealthBuddyError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            HealthBuddyError::Telegram(_) => true,
            HealthBuddyError::Lookup(_) => true,
            HealthBuddyError::Config(_) => false,
            HealthBuddyError::UserNotFound { .. } => true,
            HealthBuddyError::InvalidArgument(_) => true,
            HealthBuddyError::UnknownWorkout(_) => true,
            HealthBuddyError::InvalidStateTransition { .. } => false,
            HealthBuddyError::Http(_) => true,
            HealthBuddyError::Serialization(_) => false,
            HealthBuddyError::Io(_) => true,
            HealthBuddyError::UrlParse(_) => false,
        }
    }

    /// Errors that are answered with a message instead of being propagated
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            HealthBuddyError::UserNotFound { .. }
                | HealthBuddyError::InvalidArgument(_)
                | HealthBuddyError::UnknownWorkout(_)
                | HealthBuddyError::Lookup(_)
        )
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            HealthBuddyError::Config(_) => ErrorSeverity::Critical,
            HealthBuddyError::Lookup(_) => ErrorSeverity::Warning,
            HealthBuddyError::UserNotFound { .. } => ErrorSeverity::Info,
            HealthBuddyError::InvalidArgument(_) => ErrorSeverity::Info,
            HealthBuddyError::UnknownWorkout(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
