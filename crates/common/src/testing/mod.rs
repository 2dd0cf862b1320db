//! Testing utilities and helpers
//!
//! - **[`mocks`]**: mock credential storage with read counting and failure
//!   injection
//! - **[`time`]**: controllable wall clock
//! - **[`tokens`]**: unsigned three-segment credentials for session tests
//!
//! ## Usage
//!
//! ```rust
//! use tudofresco_common::testing::{MockClock, TokenFactory};
//! use tudofresco_common::time::Clock;
//!
//! let clock = MockClock::at_millis(1_700_000_000_000);
//! let token = TokenFactory::new().subject("user-1").role("ADMIN").expires_in_secs(&clock, 60);
//! assert_eq!(token.split('.').count(), 3);
//! ```

pub mod mocks;
pub mod time;
pub mod tokens;

pub use mocks::MockCredentialStore;
pub use time::MockClock;
pub use tokens::TokenFactory;
