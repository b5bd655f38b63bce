//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No file matched the given patterns
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Editing failed for one input
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
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
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("*.txt".to_string());
        assert_eq!(error.to_string(), "File not found: *.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown strategy 'fast'".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: unknown strategy 'fast'"
        );
    }

    #[test]
    fn test_processing_error_display() {
        let error = CliError::ProcessingError("<stdin>: predicate cannot be absent".to_string());
        assert_eq!(
            error.to_string(),
            "Processing error: <stdin>: predicate cannot be absent"
        );
    }

    #[test]
    fn test_converts_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::InvalidPattern("**[".to_string()).into());
        let error = failure.unwrap_err();
        assert!(error.downcast_ref::<CliError>().is_some());
        assert_eq!(error.to_string(), "Invalid file pattern: **[");
    }

    #[test]
    fn test_error_with_cyrillic_path() {
        let error = CliError::FileNotFound("тексты/ёлка.txt".to_string());
        assert_eq!(error.to_string(), "File not found: тексты/ёлка.txt");
    }
}
