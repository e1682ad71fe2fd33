//! Error handling for Eventhub
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

use crate::utils::validation::FieldError;

/// Main error type for the Eventhub application
#[derive(Error, Debug)]
pub enum EventhubError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: i64 },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("Email already in use: {email}")]
    DuplicateEmail { email: String },

    #[error("Already registered for event {event_id}")]
    AlreadyRegistered { event_id: i64 },

    #[error("Cannot register for a past event")]
    EventClosed { event_id: i64 },

    #[error("Event is full")]
    EventFull { event_id: i64 },

    #[error("Not registered for event {event_id}")]
    NotRegistered { event_id: i64 },

    #[error("You cannot delete yourself")]
    SelfDeletionForbidden,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Eventhub operations
pub type Result<T> = std::result::Result<T, EventhubError>;

impl From<password_hash::Error> for EventhubError {
    fn from(err: password_hash::Error) -> Self {
        EventhubError::PasswordHash(err.to_string())
    }
}

impl EventhubError {
    /// Check if the error is recoverable at the request boundary
    pub fn is_recoverable(&self) -> bool {
        match self {
            EventhubError::Database(_) => false,
            EventhubError::Migration(_) => false,
            EventhubError::Config(_) => false,
            EventhubError::Io(_) => false,
            EventhubError::Serialization(_) => false,
            EventhubError::PasswordHash(_) => false,
            // Domain errors surface as request failures and leave no partial state.
            _ => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EventhubError::Database(_) => ErrorSeverity::Critical,
            EventhubError::Migration(_) => ErrorSeverity::Critical,
            EventhubError::Config(_) => ErrorSeverity::Critical,
            EventhubError::PasswordHash(_) => ErrorSeverity::Error,
            EventhubError::Unauthorized(_) => ErrorSeverity::Warning,
            EventhubError::SelfDeletionForbidden => ErrorSeverity::Warning,
            EventhubError::Validation(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Info,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_are_recoverable() {
        assert!(EventhubError::EventFull { event_id: 1 }.is_recoverable());
        assert!(EventhubError::AlreadyRegistered { event_id: 1 }.is_recoverable());
        assert!(EventhubError::SelfDeletionForbidden.is_recoverable());
        assert!(!EventhubError::Config("missing url".to_string()).is_recoverable());
    }

    #[test]
    fn test_severity_levels() {
        assert_eq!(
            EventhubError::Config("bad".to_string()).severity(),
            ErrorSeverity::Critical
        );
        assert_eq!(
            EventhubError::Unauthorized("admin only".to_string()).severity(),
            ErrorSeverity::Warning
        );
        assert_eq!(
            EventhubError::Validation(vec![]).severity(),
            ErrorSeverity::Info
        );
    }
}
