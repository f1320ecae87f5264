use tradedesk_core::{Instrument, Price};

/// Port for instrument lookup
///
/// Implementations are read-only and must be safe to call without holding the
/// store lock. Lookups are case-insensitive.
pub trait InstrumentReference: Send + Sync {
    /// Look up an instrument by symbol
    fn instrument(&self, symbol: &str) -> Option<Instrument>;

    /// Current reference price for a symbol
    fn reference_price(&self, symbol: &str) -> Option<Price> {
        self.instrument(symbol).map(|i| i.reference_price)
    }
}
