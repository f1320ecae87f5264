//! Instrument definitions for the tradeable catalog

mod instrument;
mod instrument_type;

pub use instrument::Instrument;
pub use instrument_type::InstrumentType;
