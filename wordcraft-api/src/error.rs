//! API error types

use std::string::FromUtf8Error;
use thiserror::Error;
use wordcraft_core::EditError;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Edit validation error
    #[error(transparent)]
    Edit(#[from] EditError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Edit plan could not be parsed
    #[error("invalid edit plan: {0}")]
    Plan(#[from] toml::de::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ApiError {
    /// The underlying edit error, if this is one
    pub fn as_edit_error(&self) -> Option<&EditError> {
        match self {
            ApiError::Edit(error) => Some(error),
            _ => None,
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use wordcraft_core::ErrorKind;

    #[test]
    fn test_edit_error_is_transparent() {
        let error: ApiError = EditError::null_input("text").into();
        assert_eq!(error.to_string(), "text cannot be absent");
        assert_eq!(
            error.as_edit_error().map(EditError::kind),
            Some(ErrorKind::NullInput)
        );
    }

    #[test]
    fn test_config_error_display() {
        let error = ApiError::Config("unknown strategy 'fast'".to_string());
        assert_eq!(
            error.to_string(),
            "configuration error: unknown strategy 'fast'"
        );
        assert!(error.as_edit_error().is_none());
    }
}
