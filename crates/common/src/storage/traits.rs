//! Durable key-value storage port

use super::error::StorageResult;

/// Durable string key-value storage for session credentials
///
/// Implementations are synchronous: every backend (memory, a small JSON
/// file, the platform keychain) completes without blocking on the network.
pub trait CredentialStore: Send + Sync {
    /// Read the value stored under `key`, `None` if absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> StorageResult<()>;

    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;
}
