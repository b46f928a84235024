//! Error handling for GADtrack
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the GADtrack application
#[derive(Error, Debug)]
pub enum GadTrackError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Duplicate event name: {name}")]
    DuplicateEventName { name: String },

    #[error("Duplicate participant in event {event_id}: {reason}")]
    DuplicateParticipant { event_id: i64, reason: String },

    #[error("Duplicate email: {email}")]
    DuplicateEmail { email: String },

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: i64 },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("Participant not found: {participant_id}")]
    ParticipantNotFound { participant_id: i64 },

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<config::ConfigError> for GadTrackError {
    fn from(err: config::ConfigError) -> Self {
        GadTrackError::Config(err.to_string())
    }
}

impl From<argon2::password_hash::Error> for GadTrackError {
    fn from(err: argon2::password_hash::Error) -> Self {
        GadTrackError::Authentication(err.to_string())
    }
}

/// Result type alias for GADtrack operations
pub type Result<T> = std::result::Result<T, GadTrackError>;

impl GadTrackError {
    /// Check if the error should be surfaced to the user as a notification
    /// rather than treated as an internal failure
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            GadTrackError::Validation(_)
                | GadTrackError::DuplicateEventName { .. }
                | GadTrackError::DuplicateParticipant { .. }
                | GadTrackError::DuplicateEmail { .. }
                | GadTrackError::UserNotFound { .. }
                | GadTrackError::EventNotFound { .. }
                | GadTrackError::ParticipantNotFound { .. }
                | GadTrackError::Authentication(_)
                | GadTrackError::PermissionDenied(_)
                | GadTrackError::InvalidInput(_)
        )
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GadTrackError::Database(_) => ErrorSeverity::Critical,
            GadTrackError::Migration(_) => ErrorSeverity::Critical,
            GadTrackError::Config(_) => ErrorSeverity::Critical,
            GadTrackError::PermissionDenied(_) => ErrorSeverity::Warning,
            GadTrackError::Authentication(_) => ErrorSeverity::Warning,
            GadTrackError::Token(_) => ErrorSeverity::Warning,
            GadTrackError::Validation(_) => ErrorSeverity::Info,
            GadTrackError::DuplicateEventName { .. } => ErrorSeverity::Info,
            GadTrackError::DuplicateParticipant { .. } => ErrorSeverity::Info,
            GadTrackError::DuplicateEmail { .. } => ErrorSeverity::Info,
            GadTrackError::InvalidInput(_) => ErrorSeverity::Info,
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
