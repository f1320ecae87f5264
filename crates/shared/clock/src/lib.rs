//! Tradedesk Clock Infrastructure
//!
//! Time sources behind the [`Clock`] port:
//!
//! - [`SystemClock`]: wall-clock time, used by the running service
//! - [`ManualClock`]: frozen time that only moves when told to, used by tests
//!
//! ## Usage
//!
//! ```ignore
//! use tradedesk_clock::{Clock, ManualClock};
//! use chrono::Duration;
//!
//! let clock = ManualClock::starting_at(start);
//! clock.advance(Duration::seconds(2));
//! assert_eq!(clock.now(), start + Duration::seconds(2));
//! ```

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use tradedesk_ports::Clock;
