//! Port interfaces for the session layer
//!
//! Both traits live in `tudofresco-common` so the storage backends and the
//! test doubles can implement them without depending on this crate.

pub use tudofresco_common::storage::CredentialStore;
pub use tudofresco_common::time::Clock;
