//! Conversions from external infrastructure errors into domain errors.

use keyring::Error as KeyringError;
use reqwest::Error as HttpError;
use tudofresco_common::StorageError;
use tudofresco_domain::TudoFrescoError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub TudoFrescoError);

impl From<InfraError> for TudoFrescoError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<TudoFrescoError> for InfraError {
    fn from(value: TudoFrescoError) -> Self {
        InfraError(value)
    }
}

impl std::fmt::Display for InfraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for InfraError {}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoTudoFrescoError {
    fn into_tudofresco(self) -> TudoFrescoError;
}

/* -------------------------------------------------------------------------- */
/* keyring::Error → TudoFrescoError */
/* -------------------------------------------------------------------------- */

impl IntoTudoFrescoError for KeyringError {
    fn into_tudofresco(self) -> TudoFrescoError {
        use KeyringError::*;

        let description = self.to_string();

        match self {
            NoEntry => TudoFrescoError::NotFound("keychain entry not found".into()),
            BadEncoding(_) => {
                TudoFrescoError::Storage("credential in keychain is not valid UTF-8".into())
            }
            TooLong(name, limit) => TudoFrescoError::Storage(format!(
                "keychain attribute '{name}' exceeds platform limit ({limit})"
            )),
            Invalid(attr, reason) => TudoFrescoError::Config(format!(
                "keychain attribute '{attr}' is invalid: {reason}"
            )),
            Ambiguous(entries) => TudoFrescoError::Storage(format!(
                "multiple keychain entries matched request ({} results)",
                entries.len()
            )),
            PlatformFailure(err) => {
                TudoFrescoError::Storage(format!("keychain platform error: {err}"))
            }
            NoStorageAccess(err) => {
                TudoFrescoError::Storage(format!("unable to access secure storage: {err}"))
            }
            _ => TudoFrescoError::Storage(description),
        }
    }
}

impl From<KeyringError> for InfraError {
    fn from(value: KeyringError) -> Self {
        InfraError(value.into_tudofresco())
    }
}

/* -------------------------------------------------------------------------- */
/* StorageError → TudoFrescoError */
/* -------------------------------------------------------------------------- */

impl IntoTudoFrescoError for StorageError {
    fn into_tudofresco(self) -> TudoFrescoError {
        match self {
            StorageError::InvalidConfig(message) => TudoFrescoError::Config(message),
            other => TudoFrescoError::Storage(other.to_string()),
        }
    }
}

impl From<StorageError> for InfraError {
    fn from(value: StorageError) -> Self {
        InfraError(value.into_tudofresco())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → TudoFrescoError */
/* -------------------------------------------------------------------------- */

impl IntoTudoFrescoError for HttpError {
    fn into_tudofresco(self) -> TudoFrescoError {
        if self.is_timeout() {
            return TudoFrescoError::Network("HTTP request timed out".into());
        }

        if self.is_builder() {
            return TudoFrescoError::InvalidInput(format!("invalid HTTP request: {self}"));
        }

        if self.is_connect() {
            return TudoFrescoError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => TudoFrescoError::Auth(message),
                404 => TudoFrescoError::NotFound(message),
                400..=499 => TudoFrescoError::InvalidInput(message),
                _ => TudoFrescoError::Network(message),
            };
        }

        TudoFrescoError::Network(format!("HTTP transport error: {self}"))
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_tudofresco())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
