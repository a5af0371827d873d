//! Error types for the habit tracker library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all tracker operations.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Habit not found for the given ID
    #[error("Habit with ID {id} not found")]
    HabitNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Malformed or out-of-range user input
    #[error("Invalid input for field '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// Operation attempted before the state it depends on exists
    #[error("{message}")]
    State { message: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Coarse classification of a [`TrackerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    State,
    NotFound,
    Storage,
    Internal,
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> TrackerError {
        TrackerError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct ValidationErrorBuilder {
    field: String,
}

impl ValidationErrorBuilder {
    /// Create a new validation error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TrackerError {
        TrackerError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TrackerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn validation(field: impl Into<String>) -> ValidationErrorBuilder {
        ValidationErrorBuilder::new(field)
    }

    /// Creates a state error with the given message.
    pub fn state(message: impl Into<String>) -> Self {
        Self::State {
            message: message.into(),
        }
    }

    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::State { .. } => ErrorKind::State,
            Self::HabitNotFound { .. } => ErrorKind::NotFound,
            Self::Database { .. } | Self::FileSystem { .. } | Self::Serialization { .. } => {
                ErrorKind::Storage
            }
            Self::XdgDirectory(_) | Self::Configuration { .. } => ErrorKind::Internal,
        }
    }

    /// Whether the caller can simply retry with different input.
    ///
    /// Authoring errors never touch committed state, so they are always
    /// recoverable.
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation | ErrorKind::State)
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TrackerError::database(message).with_source(e))
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_builder() {
        let err = TrackerError::validation("name").with_reason("too short");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "Invalid input for field 'name': too short");
    }

    #[test]
    fn test_state_error_is_recoverable() {
        let err = TrackerError::state("First create a week pattern");
        assert_eq!(err.kind(), ErrorKind::State);
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "First create a week pattern");
    }

    #[test]
    fn test_not_found_is_not_recoverable() {
        let err = TrackerError::HabitNotFound { id: 7 };
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(!err.is_recoverable());
    }
}
