//! Mock implementations of the storage port

// Test mocks keep their error paths simple.
#![allow(clippy::missing_errors_doc)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::storage::{CredentialStore, StorageError, StorageResult};

/// In-memory credential store that records how it is used
///
/// Clones share state, so a test can keep one handle while the code under
/// test owns another.
///
/// ```
/// use tudofresco_common::storage::CredentialStore;
/// use tudofresco_common::testing::MockCredentialStore;
///
/// let store = MockCredentialStore::new().with_entry("accessToken", "a.b.c");
/// assert_eq!(store.get("accessToken").unwrap().as_deref(), Some("a.b.c"));
/// assert_eq!(store.read_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockCredentialStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    reads: Arc<AtomicUsize>,
    writes: Arc<AtomicUsize>,
    fail_writes: Arc<AtomicBool>,
    fail_reads: Arc<AtomicBool>,
}

impl MockCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed an entry without counting it as a write
    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.lock().insert(key.to_string(), value.to_string());
        self
    }

    /// Make every `set`/`remove` fail with [`StorageError::Unavailable`]
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Make every `get` fail with [`StorageError::Unavailable`]
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Number of `get` calls so far
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of successful `set`/`remove` calls so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Inspect the stored value without counting a read
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }
}

impl CredentialStore for MockCredentialStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("mock read failure".to_string()));
        }
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("mock write failure".to_string()));
        }
        self.entries.lock().insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("mock write failure".to_string()));
        }
        self.entries.lock().remove(key);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}
