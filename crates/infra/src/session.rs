//! Session backend selection
//!
//! Builds the durable [`CredentialStore`] named by [`SessionConfig`] and the
//! [`TokenStore`] on top of it.

use std::sync::Arc;

use tracing::{debug, info};
use tudofresco_common::{CredentialStore, FileStore, KeychainStore, MemoryStore, SystemClock};
use tudofresco_core::TokenStore;
use tudofresco_domain::constants::ACCESS_TOKEN_KEY;
use tudofresco_domain::{Result, SessionBackend, SessionConfig, TudoFrescoError};

use crate::errors::InfraError;

/// Open the credential store for the configured backend
///
/// # Errors
/// - `TudoFrescoError::Storage` if no default session path can be resolved
/// - `TudoFrescoError::Config` if the keychain service name is rejected by
///   the platform
pub fn open_credential_store(config: &SessionConfig) -> Result<Arc<dyn CredentialStore>> {
    let store: Arc<dyn CredentialStore> = match config.backend {
        SessionBackend::File => {
            let store = match &config.storage_path {
                Some(path) => FileStore::new(path),
                None => FileStore::at_default_path().map_err(InfraError::from)?,
            };
            debug!(path = %store.path().display(), "Using file session store");
            Arc::new(store)
        }
        SessionBackend::Keychain => {
            validate_keychain_service(&config.keychain_service)?;
            debug!(service = %config.keychain_service, "Using keychain session store");
            Arc::new(KeychainStore::new(config.keychain_service.clone()))
        }
        SessionBackend::Memory => {
            debug!("Using in-memory session store");
            Arc::new(MemoryStore::new())
        }
    };

    info!(backend = store.backend_name(), "Session store ready");
    Ok(store)
}

/// Token store over the configured backend and the system clock
///
/// # Errors
/// See [`open_credential_store`].
pub fn open_token_store(config: &SessionConfig) -> Result<TokenStore> {
    let storage = open_credential_store(config)?;
    Ok(TokenStore::new(storage, Arc::new(SystemClock)))
}

/// Reject service names the platform keychain cannot address, before the
/// first read turns the problem into a silently empty session.
fn validate_keychain_service(service: &str) -> Result<()> {
    if service.trim().is_empty() {
        return Err(TudoFrescoError::Config("keychain service name is empty".into()));
    }
    keyring::Entry::new(service, ACCESS_TOKEN_KEY)
        .map(|_| ())
        .map_err(|err| TudoFrescoError::from(InfraError::from(err)))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn memory_backend() {
        let config = SessionConfig { backend: SessionBackend::Memory, ..SessionConfig::default() };
        let store = open_credential_store(&config).unwrap();
        assert_eq!(store.backend_name(), "memory");
    }

    #[test]
    fn file_backend_uses_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("session.json");
        let config = SessionConfig {
            backend: SessionBackend::File,
            storage_path: Some(path.clone()),
            ..SessionConfig::default()
        };

        let tokens = open_token_store(&config).unwrap();
        tokens.set_token(Some("a.b.c"));
        assert!(path.exists());

        let reopened = open_credential_store(&config).unwrap();
        assert_eq!(reopened.get(ACCESS_TOKEN_KEY).unwrap().as_deref(), Some("a.b.c"));
    }

    #[test]
    fn keychain_backend_rejects_empty_service() {
        let config = SessionConfig {
            backend: SessionBackend::Keychain,
            keychain_service: "  ".into(),
            ..SessionConfig::default()
        };
        assert!(matches!(open_credential_store(&config), Err(TudoFrescoError::Config(_))));
    }
}
