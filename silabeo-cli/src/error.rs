//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No file matched the given patterns
    NoFilesFound(Vec<String>),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration file could not be parsed or resolved
    ConfigError(String),
    /// Thread pool could not be started
    ThreadPool(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoFilesFound(patterns) => write!(
                f,
                "No files found matching the provided patterns: {}",
                patterns.join(", ")
            ),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ThreadPool(msg) => write!(f, "Failed to start worker threads: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_files_found_display() {
        let error = CliError::NoFilesFound(vec!["*.txt".to_string(), "docs/*.md".to_string()]);
        assert_eq!(
            error.to_string(),
            "No files found matching the provided patterns: *.txt, docs/*.md"
        );
    }

    #[test]
    fn test_invalid_pattern_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown attachment mode".to_string());
        assert_eq!(error.to_string(), "Configuration error: unknown attachment mode");
    }

    #[test]
    fn test_error_converts_to_anyhow() {
        let failure: CliResult<()> = Err(CliError::ThreadPool("zero threads".to_string()).into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().contains("zero threads"));
    }

    #[test]
    fn test_unicode_in_messages() {
        let error = CliError::InvalidPattern("cañón/**[".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: cañón/**[");
    }
}
