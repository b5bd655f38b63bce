//! Core error types (deterministic only)

use thiserror::Error;

/// Validation errors raised before any scanning starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// A required argument was not supplied
    #[error("{argument} cannot be absent")]
    NullInput {
        /// Name of the missing argument
        argument: &'static str,
    },

    /// An argument was supplied but is out of range
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Human-readable explanation
        reason: String,
    },
}

/// Discriminant of [`EditError`] for callers that branch on the failure kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Text, predicate or replacement missing
    NullInput,
    /// Negative offset or position
    InvalidArgument,
}

impl EditError {
    /// Build a [`EditError::NullInput`] for the named argument
    pub fn null_input(argument: &'static str) -> Self {
        EditError::NullInput { argument }
    }

    /// Build a [`EditError::InvalidArgument`] with the given reason
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        EditError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// The kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            EditError::NullInput { .. } => ErrorKind::NullInput,
            EditError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, EditError>;

/// Validate an in-word position and convert it to an index
pub(crate) fn check_position(position: isize) -> Result<usize> {
    usize::try_from(position)
        .map_err(|_| EditError::invalid_argument("replacement position cannot be negative"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_input_display() {
        let error = EditError::null_input("predicate");
        assert_eq!(error.to_string(), "predicate cannot be absent");
        assert_eq!(error.kind(), ErrorKind::NullInput);
    }

    #[test]
    fn test_invalid_argument_display() {
        let error = EditError::invalid_argument("replacement position cannot be negative");
        assert_eq!(
            error.to_string(),
            "invalid argument: replacement position cannot be negative"
        );
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_check_position() {
        assert_eq!(check_position(0), Ok(0));
        assert_eq!(check_position(7), Ok(7));
        assert_eq!(
            check_position(-10).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }
}
