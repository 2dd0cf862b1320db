//! Time utilities and abstractions
//!
//! - **[`clock`]**: wall-clock abstraction so expiry checks can run against
//!   a mock clock in tests

pub mod clock;

pub use clock::{Clock, SystemClock};
