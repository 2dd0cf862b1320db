//! Platform keychain credential storage
//!
//! Thin wrapper over the platform keychain (macOS Keychain Access, Windows
//! Credential Manager, Linux Secret Service).
//!
//! ```no_run
//! use tudofresco_common::storage::{CredentialStore, KeychainStore};
//!
//! let keychain = KeychainStore::new("TudoFresco.session");
//! keychain.set("accessToken", "header.payload.signature")?;
//! assert!(keychain.get("accessToken")?.is_some());
//! # Ok::<(), tudofresco_common::storage::StorageError>(())
//! ```

use keyring::Entry;
use tracing::debug;

use super::error::{StorageError, StorageResult};
use super::traits::CredentialStore;

pub struct KeychainStore {
    service_name: String,
}

impl KeychainStore {
    /// Create a keychain store for a service (e.g. "TudoFresco.session")
    pub fn new(service_name: impl Into<String>) -> Self {
        Self { service_name: service_name.into() }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    fn create_entry(&self, key: &str) -> StorageResult<Entry> {
        Entry::new(&self.service_name, key).map_err(|e| map_keyring_error(key, "open", &e))
    }
}

fn map_keyring_error(key: &str, operation: &str, err: &keyring::Error) -> StorageError {
    match err {
        keyring::Error::NoStorageAccess(_) | keyring::Error::PlatformFailure(_) => {
            StorageError::Unavailable(format!("Failed to {operation} {key}: {err}"))
        }
        _ => StorageError::Keychain(format!("Failed to {operation} {key}: {err}")),
    }
}

impl CredentialStore for KeychainStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        debug!(service = %self.service_name, key = %key, "Retrieving secret from keychain");

        let entry = self.create_entry(key)?;
        match entry.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(map_keyring_error(key, "retrieve", &e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        debug!(service = %self.service_name, key = %key, "Storing secret in keychain");

        let entry = self.create_entry(key)?;
        entry.set_password(value).map_err(|e| map_keyring_error(key, "store", &e))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        debug!(service = %self.service_name, key = %key, "Deleting secret from keychain");

        let entry = self.create_entry(key)?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(map_keyring_error(key, "delete", &e)),
        }
    }

    fn backend_name(&self) -> &'static str {
        "keychain"
    }
}

impl std::fmt::Debug for KeychainStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeychainStore").field("service_name", &self.service_name).finish()
    }
}
