//! Core error types (deterministic only)

use core::fmt;

/// Core errors. Segmentation itself cannot fail; these only arise while
/// building a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// `min_len` must be at least 1
    InvalidMinLength(usize),
    /// Attachment mode outside `separate | left | right | auto`
    UnknownAttachMode(String),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidMinLength(len) => {
                write!(f, "minimum token length must be at least 1, got {len}")
            }
            CoreError::UnknownAttachMode(mode) => write!(
                f,
                "unknown attachment mode '{mode}' (expected separate, left, right or auto)"
            ),
        }
    }
}

impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
