//! Custom error types for termfolio
//!
//! Visitor mistakes (unknown commands, missing files) are rendered as output and
//! never surface here. These errors cover configuration and host I/O.

use thiserror::Error;

/// Main error type for termfolio operations
#[derive(Error, Debug)]
pub enum TermfolioError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme name not present in the configured theme list
    #[error("Unknown theme '{0}'. Check [theme].names in your config")]
    UnknownTheme(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Generic error for other cases
    #[error("{0}")]
    Other(String),
}

/// Convenience Result type for termfolio operations
pub type Result<T> = std::result::Result<T, TermfolioError>;

impl TermfolioError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an unknown theme error
    pub fn unknown_theme(name: impl Into<String>) -> Self {
        Self::UnknownTheme(name.into())
    }

    /// Wrap an error with additional context
    pub fn with_context<E>(context: impl Into<String>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::WithContext {
            context: context.into(),
            source: Box::new(error),
        }
    }
}
