//! Tradedesk Core Domain
//!
//! Pure domain types for the tradedesk execution and settlement core.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod error;
pub mod instruments;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Holding, Order, OrderId, OrderState, OrderStyle, Side, Trade, TradeId};
pub use error::{HoldingOverflowError, OrderStateError, OrderValidationError};
pub use instruments::{Instrument, InstrumentType};
pub use values::{OwnerId, Price, Quantity, Symbol, Timestamp};
