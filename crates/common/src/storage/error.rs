//! Storage error types
//!
//! Defines error types for the durable credential backends, classified
//! through [`ErrorClassification`].

use std::path::PathBuf;

use thiserror::Error;

use crate::error::{ErrorClassification, ErrorSeverity};

/// Storage error type
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Keychain error: {0}")]
    Keychain(String),

    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("Corrupt store file {}: {message}", path.display())]
    Corrupt { path: PathBuf, message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

/// Storage result type
pub type StorageResult<T> = Result<T, StorageError>;

impl ErrorClassification for StorageError {
    /// Locked keychains and busy files may succeed on a later attempt
    fn is_retryable(&self) -> bool {
        match self {
            Self::Unavailable(_) => true,
            Self::Io(err) => matches!(
                err.kind(),
                std::io::ErrorKind::Interrupted | std::io::ErrorKind::WouldBlock
            ),
            _ => false,
        }
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Keychain(_) => ErrorSeverity::Error,
            Self::Unavailable(_) => ErrorSeverity::Warning,
            Self::Corrupt { .. } => ErrorSeverity::Critical,
            Self::InvalidConfig(_) => ErrorSeverity::Error,
            Self::Io(_) => ErrorSeverity::Error,
            Self::SerdeJson(_) => ErrorSeverity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupt_file_is_critical() {
        let err = StorageError::Corrupt {
            path: PathBuf::from("/tmp/session.json"),
            message: "expected value".into(),
        };
        assert!(err.is_critical());
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("/tmp/session.json"));
    }

    #[test]
    fn write_failures_are_errors_not_retries() {
        let err = StorageError::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert!(!err.is_retryable());

        let err = StorageError::Io(std::io::Error::from(std::io::ErrorKind::Interrupted));
        assert!(err.is_retryable());
    }

    #[test]
    fn unavailable_backend_is_retryable() {
        assert!(StorageError::Unavailable("secret service".into()).is_retryable());
    }
}
