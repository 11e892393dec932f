//! Error types for the AI events dashboard.

use thiserror::Error;

/// Errors that can occur in dashboard operations.
#[derive(Error, Debug)]
pub enum EventsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not fetch {location}: {reason}")]
    Fetch { location: String, reason: String },

    #[error("CSV parse error: {0}")]
    Parse(String),

    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for dashboard operations.
pub type EventsResult<T> = Result<T, EventsError>;
