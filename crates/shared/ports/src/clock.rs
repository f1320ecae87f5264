use tradedesk_core::Timestamp;

/// Port for time abstraction
///
/// Trades and order lifecycle stamps read time through this port, so tests can
/// pin it with a manual clock instead of the wall clock.
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    fn now(&self) -> Timestamp;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
