use solana_program::clock::UnixTimestamp;

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

pub trait Clock: Send + Sync {
    fn unix_timestamp(&self) -> UnixTimestamp;
}

/// Clock that only moves when told to. Clones share the same time, so a
/// test can keep a handle while the proxy owns another one.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Arc<AtomicI64>,
}

impl ManualClock {
    pub fn new(start: UnixTimestamp) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(start)),
        }
    }

    /// Moves the clock forward by `seconds`, negative values are ignored.
    pub fn warp(&self, seconds: UnixTimestamp) -> UnixTimestamp {
        let seconds = seconds.max(0);
        self.now.fetch_add(seconds, Ordering::SeqCst) + seconds
    }

    /// Moves the clock to `timestamp` unless it is already past it.
    pub fn warp_to(&self, timestamp: UnixTimestamp) -> UnixTimestamp {
        self.now.fetch_max(timestamp, Ordering::SeqCst).max(timestamp)
    }
}

impl Clock for ManualClock {
    fn unix_timestamp(&self) -> UnixTimestamp {
        self.now.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn never_runs_backwards() {
        let clock = ManualClock::new(100);
        let handle = clock.clone();

        assert_eq!(clock.warp(20), 120);
        assert_eq!(handle.unix_timestamp(), 120);
        assert_eq!(handle.warp_to(50), 120);
        assert_eq!(clock.warp(-30), 120);
        assert_eq!(clock.warp_to(3660), 3660);
        assert_eq!(handle.unix_timestamp(), 3660);
    }
}
