//! # Tudo Fresco Core
//!
//! Session logic - no HTTP or platform code.
//!
//! This crate contains:
//! - The claims validator for bearer credentials
//! - [`TokenStore`], the single owner of the current credential
//! - Access policy used to guard member-only operations
//!
//! ## Architecture Principles
//! - Only depends on `tudofresco-common` and `tudofresco-domain`
//! - Durable storage and time come in through ports (traits)
//! - Pure, testable business logic

pub mod session;

pub use session::claims::{decode_claims, ClaimsError};
pub use session::policy::{SessionSnapshot, MEMBER_ROLES};
pub use session::ports::{Clock, CredentialStore};
pub use session::store::TokenStore;
