//! API error types

use std::string::FromUtf8Error;
use thiserror::Error;

pub use moodwire_core::CoreError;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Aggregation-core error (scoring failure or invalid argument)
    #[error("analysis error: {0}")]
    Core(#[from] CoreError),

    /// I/O error while reading an input source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
