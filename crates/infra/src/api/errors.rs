//! API-specific error types
//!
//! [`ApiError`] is the one error type the gateway hands back to callers. Its
//! `Display` output is the user-facing message, so the UI layer can print it
//! as is; the detail fields are for logs.

use std::time::Duration;

use thiserror::Error;
use tudofresco_domain::TudoFrescoError;

/// Categories of API errors for UI decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Missing or rejected session (401, 403, no local credential)
    Authentication,
    /// Rate limiting errors (429)
    RateLimit,
    /// Server errors (5xx) and responses the client cannot understand
    Server,
    /// Client errors (4xx except auth) and requests that could not be built
    Client,
    /// Network/connection errors and timeouts
    Network,
    /// Configuration errors
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend did not answer within the configured deadline
    #[error("The request took too long to respond. Check your connection.")]
    Timeout(Duration),

    /// No connection could be established. The field holds transport detail.
    #[error("Could not reach the server. Check your internet connection.")]
    Network(String),

    /// Non-2xx response carrying an envelope
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Body was not an envelope, or the payload did not match the expected type
    #[error("Invalid server response")]
    InvalidResponse { status: u16 },

    /// The operation needs a signed-in user and there is no valid session
    #[error("You need to sign in to continue.")]
    Unauthenticated,

    /// The request could not be assembled (bad header, unreadable upload)
    #[error("Invalid request: {0}")]
    Request(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Unauthenticated => ApiErrorCategory::Authentication,
            Self::Server { status, .. } => match status {
                401 | 403 => ApiErrorCategory::Authentication,
                429 => ApiErrorCategory::RateLimit,
                400..=499 => ApiErrorCategory::Client,
                _ => ApiErrorCategory::Server,
            },
            Self::InvalidResponse { .. } => ApiErrorCategory::Server,
            Self::Request(_) => ApiErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// Whether asking the user to try again can help
    pub fn is_user_retryable(&self) -> bool {
        matches!(self.category(), ApiErrorCategory::Network | ApiErrorCategory::RateLimit)
    }

    /// HTTP status of the response, when one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } | Self::InvalidResponse { status } => Some(*status),
            _ => None,
        }
    }
}

/// Convert transport-level domain errors into gateway errors
impl From<TudoFrescoError> for ApiError {
    fn from(err: TudoFrescoError) -> Self {
        match err {
            TudoFrescoError::Network(message) => Self::Network(message),
            TudoFrescoError::Config(message) => Self::Config(message),
            TudoFrescoError::Auth(_) => Self::Unauthenticated,
            TudoFrescoError::InvalidInput(message)
            | TudoFrescoError::NotFound(message)
            | TudoFrescoError::Storage(message)
            | TudoFrescoError::Internal(message) => Self::Request(message),
        }
    }
}
