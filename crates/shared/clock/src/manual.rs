use chrono::{Duration, Utc};
use std::sync::RwLock;
use tradedesk_core::Timestamp;
use tradedesk_ports::Clock;

/// Clock frozen at a fixed instant
///
/// Time only moves through [`ManualClock::set`] or [`ManualClock::advance`],
/// which makes `executed_at` and trade timestamps deterministic in tests.
#[derive(Debug)]
pub struct ManualClock {
    current: RwLock<Timestamp>,
}

impl ManualClock {
    /// Create a clock frozen at the current wall-clock time
    pub fn new() -> Self {
        Self::starting_at(Utc::now())
    }

    /// Create a clock frozen at `start`
    pub fn starting_at(start: Timestamp) -> Self {
        Self {
            current: RwLock::new(start),
        }
    }

    /// Jump to an explicit instant
    pub fn set(&self, time: Timestamp) {
        let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
        *current = time;
    }

    /// Move time forward by `by`
    pub fn advance(&self, by: Duration) {
        let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
        *current += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.current.read().unwrap_or_else(|e| e.into_inner())
    }

    fn name(&self) -> &str {
        "ManualClock"
    }
}
