//! Controllable wall clock

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::time::Clock;

/// Mock clock for deterministic expiry tests
///
/// Clones share the same instant, so a clone handed to the code under test
/// moves when the test advances the original.
///
/// ```
/// use std::time::Duration;
///
/// use tudofresco_common::testing::MockClock;
/// use tudofresco_common::time::Clock;
///
/// let clock = MockClock::at_millis(1_000);
/// clock.advance(Duration::from_secs(5));
/// assert_eq!(clock.millis_since_epoch(), 6_000);
/// ```
#[derive(Debug, Clone)]
pub struct MockClock {
    millis: Arc<AtomicI64>,
}

impl MockClock {
    /// Start at the current real time
    pub fn new() -> Self {
        Self::at_millis(crate::time::SystemClock.millis_since_epoch())
    }

    /// Start at a fixed epoch-milliseconds instant
    pub fn at_millis(millis: i64) -> Self {
        Self { millis: Arc::new(AtomicI64::new(millis)) }
    }

    /// Start at a fixed epoch-seconds instant
    pub fn at_secs(secs: i64) -> Self {
        Self::at_millis(secs.saturating_mul(1000))
    }

    pub fn advance(&self, duration: Duration) {
        let delta = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
        self.millis.fetch_add(delta, Ordering::SeqCst);
    }

    pub fn set_millis(&self, millis: i64) {
        self.millis.store(millis, Ordering::SeqCst);
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn system_time(&self) -> SystemTime {
        let millis = self.millis.load(Ordering::SeqCst);
        u64::try_from(millis)
            .map(|millis| UNIX_EPOCH + Duration::from_millis(millis))
            .unwrap_or(UNIX_EPOCH)
    }

    fn millis_since_epoch(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_time() {
        let clock = MockClock::at_secs(100);
        let shared = clock.clone();
        clock.advance(Duration::from_millis(250));
        assert_eq!(shared.millis_since_epoch(), 100_250);
    }

    #[test]
    fn system_time_matches_millis() {
        let clock = MockClock::at_millis(42);
        assert_eq!(clock.system_time(), UNIX_EPOCH + Duration::from_millis(42));
        clock.set_millis(7);
        assert_eq!(clock.millis_since_epoch(), 7);
    }
}
