//! Wall-clock abstraction for testability
//!
//! # Examples
//!
//! ```
//! use tudofresco_common::time::{Clock, SystemClock};
//!
//! let clock = SystemClock;
//! assert!(clock.millis_since_epoch() > 0);
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current wall-clock time
///
/// Credential expiry is expressed in epoch time, so only the wall clock
/// matters here.
pub trait Clock: Send + Sync {
    /// Get current system time (wall clock)
    fn system_time(&self) -> SystemTime;

    /// Milliseconds since the UNIX epoch. Times before the epoch read as 0.
    fn millis_since_epoch(&self) -> i64 {
        self.system_time()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or_default()
    }
}

/// Real system clock implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn system_time(&self) -> SystemTime {
        SystemTime::now()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    struct FixedClock(SystemTime);

    impl Clock for FixedClock {
        fn system_time(&self) -> SystemTime {
            self.0
        }
    }

    #[test]
    fn millis_since_epoch_uses_system_time() {
        let clock = FixedClock(UNIX_EPOCH + Duration::from_millis(1_700_000_000_123));
        assert_eq!(clock.millis_since_epoch(), 1_700_000_000_123);
    }

    #[test]
    fn times_before_epoch_read_as_zero() {
        let clock = FixedClock(UNIX_EPOCH - Duration::from_secs(10));
        assert_eq!(clock.millis_since_epoch(), 0);
    }

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.millis_since_epoch() > 1_577_836_800_000);
    }
}
