//! Error types for the simulation driver.
//!
//! The engine itself never fails; everything here comes from reading
//! configuration, validating it, and writing reports.

use thiserror::Error;

/// Main error type for driver operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or inconsistent configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Values outside the accepted ranges
    #[error("Validation error: {0}")]
    Validation(String),

    /// File system and terminal errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON encoding errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<AppError>,
    },
}

/// Result type alias for driver operations.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a new validation error.
    #[must_use]
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}
