//! Integration tests for the token store
//!
//! Covers the session lifecycle across process restarts (file storage) and
//! concurrent readers sharing one store.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tudofresco_common::storage::{FileStore, MemoryStore};
use tudofresco_common::testing::{MockClock, TokenFactory};
use tudofresco_core::{TokenStore, MEMBER_ROLES};
use tudofresco_domain::AccessLevel;

const NOW_SECS: i64 = 1_750_000_000;

/// Scenario: log in, restart, find the session, log out, restart again
#[test]
fn test_session_survives_restart_until_logout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let clock = MockClock::at_secs(NOW_SECS);
    let token =
        TokenFactory::new().subject("u-42").role("STORE_OWNER").expires_in_secs(&clock, 3600);

    let first_run = TokenStore::new(Arc::new(FileStore::new(&path)), Arc::new(clock.clone()));
    first_run.set_token(Some(&token));
    drop(first_run);

    let second_run = TokenStore::new(Arc::new(FileStore::new(&path)), Arc::new(clock.clone()));
    assert_eq!(second_run.token().as_deref(), Some(token.as_str()));
    assert_eq!(second_run.user_id().as_deref(), Some("u-42"));
    assert!(second_run.has_access(MEMBER_ROLES));
    second_run.clear();
    drop(second_run);

    let third_run = TokenStore::new(Arc::new(FileStore::new(&path)), Arc::new(clock));
    assert_eq!(third_run.token(), None);
    assert_eq!(third_run.role(), AccessLevel::Guest);
}

/// Scenario: the session expires while the client is running
#[test]
fn test_snapshot_flips_to_guest_on_expiry() {
    let clock = MockClock::at_secs(NOW_SECS);
    let store = TokenStore::new(
        Arc::new(MemoryStore::new()),
        Arc::new(clock.clone()),
    );
    store.set_token(Some(&TokenFactory::new().role("EMPLOYEE").expires_in_secs(&clock, 5)));

    let before = store.snapshot();
    assert!(before.authenticated);
    assert_eq!(before.role, AccessLevel::Employee);
    assert_eq!(before.expires_at, Some(NOW_SECS + 5));

    clock.advance(Duration::from_secs(5));
    let after = store.snapshot();
    assert!(!after.authenticated);
    assert_eq!(after.role, AccessLevel::Guest);
}

#[test]
fn test_concurrent_readers_and_writer() {
    let clock = MockClock::at_secs(NOW_SECS);
    let store = Arc::new(TokenStore::new(
        Arc::new(MemoryStore::new()),
        Arc::new(clock.clone()),
    ));
    let token = TokenFactory::new().expires_in_secs(&clock, 600);
    store.set_token(Some(&token));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..100 {
                    // Either the credential or nothing, never a torn value.
                    if let Some(value) = store.token() {
                        assert_eq!(value.split('.').count(), 3);
                    }
                }
            })
        })
        .collect();

    for _ in 0..50 {
        store.set_token(None);
        store.set_token(Some(&token));
    }
    for reader in readers {
        reader.join().unwrap();
    }
    assert!(store.is_valid());
}
