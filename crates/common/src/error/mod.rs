//! Error classification shared by the storage backends and the session layer
//!
//! Module errors stay concrete (`StorageError`, `ClaimsError`, ...) and
//! implement [`ErrorClassification`] so callers can decide how loudly to log
//! a failure and whether trying again makes sense.
//!
//! | Level | Examples |
//! |-------|----------|
//! | **Info** | Nothing stored yet |
//! | **Warning** | Keychain locked, file busy |
//! | **Error** | Write refused, bad configuration |
//! | **Critical** | Session file no longer parses |

use std::fmt;

/// Classification of a module error
pub trait ErrorClassification {
    /// Whether the same operation may succeed if attempted again
    fn is_retryable(&self) -> bool;

    fn severity(&self) -> ErrorSeverity;

    /// Whether stored data can no longer be trusted
    fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }
}

/// Severity scale, ordered from least to most serious
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl ErrorSeverity {
    /// Lowercase name used as a structured log field
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
