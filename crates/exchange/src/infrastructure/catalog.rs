use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::Arc;
use tradedesk_core::{Instrument, Price};
use tradedesk_ports::InstrumentReference;

/// Read-only catalog of listed instruments
///
/// Built once at startup and never mutated, so lookups take no lock.
/// Cloning shares the same catalog.
#[derive(Debug, Clone, Default)]
pub struct InstrumentCatalog {
    instruments: Arc<HashMap<String, Instrument>>,
}

impl InstrumentCatalog {
    /// Build a catalog; a later listing of the same symbol replaces an earlier one
    pub fn new(instruments: impl IntoIterator<Item = Instrument>) -> Self {
        let instruments = instruments
            .into_iter()
            .map(|instrument| (Instrument::key(&instrument.symbol), instrument))
            .collect();

        Self {
            instruments: Arc::new(instruments),
        }
    }

    /// Catalog with the default NSE equity listings
    pub fn with_defaults() -> Self {
        Self::new(Self::default_instruments())
    }

    pub fn default_instruments() -> Vec<Instrument> {
        vec![
            Instrument::equity("RELIANCE", "NSE", dec!(2500.00)),
            Instrument::equity("TCS", "NSE", dec!(3800.00)),
            Instrument::equity("INFY", "NSE", dec!(1500.50)),
        ]
    }

    /// All instruments, sorted by symbol
    pub fn all(&self) -> Vec<Instrument> {
        let mut instruments: Vec<Instrument> = self.instruments.values().cloned().collect();
        instruments.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        instruments
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}

impl InstrumentReference for InstrumentCatalog {
    fn instrument(&self, symbol: &str) -> Option<Instrument> {
        self.instruments.get(&Instrument::key(symbol)).cloned()
    }

    fn reference_price(&self, symbol: &str) -> Option<Price> {
        self.instruments
            .get(&Instrument::key(symbol))
            .map(|instrument| instrument.reference_price)
    }
}
