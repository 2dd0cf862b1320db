//! Bearer-credential session
//!
//! [`store::TokenStore`] keeps the credential in memory, mirrors it to a
//! [`ports::CredentialStore`], and answers every question the rest of the
//! client asks about the session (is it valid, who is it, what may it do).

pub mod claims;
pub mod policy;
pub mod ports;
pub mod store;
