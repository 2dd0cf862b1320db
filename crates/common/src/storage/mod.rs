//! Durable key-value storage for session credentials
//!
//! Backends:
//! - [`MemoryStore`]: process memory, used by tests and ephemeral sessions
//! - [`FileStore`]: a JSON object on disk (the default)
//! - [`KeychainStore`]: the platform keychain (`platform` feature)

pub mod error;
pub mod file;
#[cfg(feature = "platform")]
pub mod keychain;
pub mod memory;
pub mod traits;

pub use error::{StorageError, StorageResult};
pub use file::FileStore;
#[cfg(feature = "platform")]
pub use keychain::KeychainStore;
pub use memory::MemoryStore;
pub use traits::CredentialStore;
