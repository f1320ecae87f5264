use serde::{Deserialize, Serialize};

use super::InstrumentType;
use crate::values::{Price, Symbol};

/// A listed instrument and its reference price
///
/// Instruments are immutable for the lifetime of the process; the reference
/// price is the price market orders execute at and limit orders are tested
/// against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub symbol: Symbol,
    pub exchange: String,
    pub instrument_type: InstrumentType,
    pub reference_price: Price,
}

impl Instrument {
    /// Create a new instrument
    pub fn new(
        symbol: impl Into<Symbol>,
        exchange: impl Into<String>,
        instrument_type: InstrumentType,
        reference_price: Price,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            exchange: exchange.into(),
            instrument_type,
            reference_price,
        }
    }

    /// Create a cash equity listing
    pub fn equity(symbol: impl Into<Symbol>, exchange: impl Into<String>, price: Price) -> Self {
        Self::new(symbol, exchange, InstrumentType::Equity, price)
    }

    /// Case-insensitive symbol match
    pub fn matches(&self, symbol: &str) -> bool {
        self.symbol.eq_ignore_ascii_case(symbol.trim())
    }

    /// Normalized lookup key for a symbol
    pub fn key(symbol: &str) -> String {
        symbol.trim().to_ascii_uppercase()
    }
}
