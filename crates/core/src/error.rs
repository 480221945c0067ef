//! Error types for the core crate

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core errors
#[derive(Error, Debug)]
pub enum Error {
    /// A goal book status outside `unread`, `reading`, `done`
    #[error("Invalid goal book status '{0}' (expected unread, reading or done)")]
    InvalidStatus(String),

    /// Input that cannot be an ISBN-13
    #[error("Invalid ISBN-13 '{value}': {reason}")]
    InvalidIsbn {
        /// Input as given
        value: String,
        /// What was wrong with it
        reason: &'static str,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn invalid_isbn(value: &str, reason: &'static str) -> Self {
        Self::InvalidIsbn {
            value: value.to_string(),
            reason,
        }
    }
}
