//! Modular common utilities shared across Tudo Fresco crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: error classification
//! - `runtime`: clock abstraction, durable key-value storage (memory, JSON
//!   file)
//! - `platform`: platform keychain storage
//! - `test-utils`: mock clock, mock credential store, unsigned token factory
//! - `observability`: tracing (pulled in by `runtime`)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod error;

// Runtime tier
// --------------------------------------------------------------------
#[cfg(feature = "runtime")]
pub mod storage;
#[cfg(feature = "runtime")]
pub mod time;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(feature = "test-utils")]
pub mod testing;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "foundation")]
pub use error::{ErrorClassification, ErrorSeverity};
#[cfg(feature = "platform")]
pub use storage::KeychainStore;
#[cfg(feature = "runtime")]
pub use storage::{CredentialStore, FileStore, MemoryStore, StorageError, StorageResult};
#[cfg(feature = "runtime")]
pub use time::{Clock, SystemClock};
