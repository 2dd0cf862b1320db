//! Token store - single owner of the current bearer credential

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, warn};
use tudofresco_common::error::ErrorClassification;
use tudofresco_common::storage::MemoryStore;
use tudofresco_common::time::SystemClock;
use tudofresco_domain::constants::ACCESS_TOKEN_KEY;
use tudofresco_domain::{AccessLevel, Claims};

use super::claims::{decode_claims, ClaimsError};
use super::policy::SessionSnapshot;
use super::ports::{Clock, CredentialStore};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    /// Durable storage has not been consulted yet
    Unloaded,
    Loaded(Option<String>),
}

/// Holds the current credential and derives session facts from it
///
/// The in-memory slot is authoritative once loaded. Durable storage is read
/// once, lazily, and written on every [`TokenStore::set_token`]. Writes reach
/// durable storage in the order they were applied in memory, without holding
/// the slot lock across the I/O.
///
/// ```
/// use std::sync::Arc;
///
/// use tudofresco_common::storage::MemoryStore;
/// use tudofresco_common::time::SystemClock;
/// use tudofresco_core::TokenStore;
///
/// let store = TokenStore::new(Arc::new(MemoryStore::new()), Arc::new(SystemClock));
/// assert_eq!(store.token(), None);
/// assert!(store.is_expired());
/// ```
pub struct TokenStore {
    storage: Arc<dyn CredentialStore>,
    clock: Arc<dyn Clock>,
    slot: RwLock<Slot>,
    writer: Mutex<()>,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn CredentialStore>, clock: Arc<dyn Clock>) -> Self {
        Self { storage, clock, slot: RwLock::new(Slot::Unloaded), writer: Mutex::new(()) }
    }

    /// Process-memory store on the system clock
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), Arc::new(SystemClock))
    }

    /// Replace the credential in memory and in durable storage
    ///
    /// `None` (or an empty string) clears both. A durable-storage failure is
    /// logged and the in-memory state still changes.
    pub fn set_token(&self, token: Option<&str>) {
        let token = token.filter(|value| !value.is_empty());
        let _writer = self.writer.lock();
        *self.slot.write() = Slot::Loaded(token.map(str::to_string));

        let result = match token {
            Some(value) => self.storage.set(ACCESS_TOKEN_KEY, value),
            None => self.storage.remove(ACCESS_TOKEN_KEY),
        };
        if let Err(err) = result {
            warn!(
                backend = self.storage.backend_name(),
                clearing = token.is_none(),
                severity = %err.severity(),
                retryable = err.is_retryable(),
                error = %err,
                "Failed to persist session credential"
            );
        }
    }

    /// Logout: drop the credential everywhere
    pub fn clear(&self) {
        self.set_token(None);
    }

    /// The current credential if present and not expired
    pub fn token(&self) -> Option<String> {
        let raw = self.raw_token()?;
        match decode_claims(&raw) {
            Ok(claims) if !claims.is_expired_at(self.now_millis()) => Some(raw),
            Ok(_) => {
                debug!("Stored credential has expired");
                None
            }
            Err(err) => {
                debug!(error = %err, "Stored credential does not decode");
                None
            }
        }
    }

    /// Decoded claims of the current credential, `None` on any failure
    pub fn decode(&self) -> Option<Claims> {
        match self.claims() {
            Ok(claims) => Some(claims),
            Err(ClaimsError::Absent) => None,
            Err(err) => {
                debug!(error = %err, "Failed to decode credential");
                None
            }
        }
    }

    /// Tagged validation result behind [`TokenStore::decode`]
    pub fn claims(&self) -> Result<Claims, ClaimsError> {
        let raw = self.raw_token().ok_or(ClaimsError::Absent)?;
        decode_claims(&raw)
    }

    /// `true` when no claims decode or `now >= exp`
    pub fn is_expired(&self) -> bool {
        self.decode().map_or(true, |claims| claims.is_expired_at(self.now_millis()))
    }

    pub fn is_valid(&self) -> bool {
        !self.is_expired()
    }

    /// Decoded role, [`AccessLevel::Guest`] when nothing decodes
    pub fn role(&self) -> AccessLevel {
        self.decode().map_or(AccessLevel::Guest, |claims| claims.role)
    }

    /// Decoded subject
    pub fn user_id(&self) -> Option<String> {
        self.decode().map(|claims| claims.subject)
    }

    /// Valid session whose role is one of `allowed`
    pub fn has_access(&self, allowed: &[AccessLevel]) -> bool {
        self.snapshot().permits(allowed)
    }

    /// Everything the UI shows about the session, from a single decode
    pub fn snapshot(&self) -> SessionSnapshot {
        match self.decode() {
            Some(claims) if !claims.is_expired_at(self.now_millis()) => SessionSnapshot {
                authenticated: true,
                role: claims.role,
                user_id: Some(claims.subject),
                expires_at: Some(claims.expires_at),
            },
            _ => SessionSnapshot::guest(),
        }
    }

    /// Stored credential without expiry or shape checks
    fn raw_token(&self) -> Option<String> {
        {
            let slot = self.slot.read();
            if let Slot::Loaded(token) = &*slot {
                return token.clone();
            }
        }

        let mut slot = self.slot.write();
        // Another reader may have loaded it while we waited.
        if let Slot::Loaded(token) = &*slot {
            return token.clone();
        }
        match self.storage.get(ACCESS_TOKEN_KEY) {
            Ok(token) => {
                let token = token.filter(|value| !value.is_empty());
                debug!(
                    backend = self.storage.backend_name(),
                    found = token.is_some(),
                    "Loaded session credential"
                );
                *slot = Slot::Loaded(token.clone());
                token
            }
            Err(err) => {
                // Leave the slot unloaded so the next read retries.
                warn!(
                    backend = self.storage.backend_name(),
                    severity = %err.severity(),
                    retryable = err.is_retryable(),
                    error = %err,
                    "Failed to read session credential"
                );
                None
            }
        }
    }

    fn now_millis(&self) -> i64 {
        self.clock.millis_since_epoch()
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &*self.slot.read() {
            Slot::Unloaded => "unloaded",
            Slot::Loaded(None) => "empty",
            Slot::Loaded(Some(_)) => "present",
        };
        f.debug_struct("TokenStore")
            .field("backend", &self.storage.backend_name())
            .field("credential", &state)
            .finish()
    }
}
