//! API error types

use silabeo_core::CoreError;
use std::string::FromUtf8Error;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required field (`word` or `text`) was not supplied
    #[error("the field '{0}' is required")]
    InvalidInput(&'static str),

    /// An option value was rejected while resolving the configuration
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// Core configuration error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
