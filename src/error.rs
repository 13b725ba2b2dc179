//! Error types for fx-exchange

use thiserror::Error;

/// Main error type for fx-exchange
#[derive(Error, Debug)]
pub enum FxError {
    // Validation messages are user-facing full sentences; the run loop
    // prints them verbatim after an "Error: " prefix.
    #[error("{0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for fx-exchange operations
pub type Result<T> = std::result::Result<T, FxError>;
