//! Tradedesk Ports
//!
//! Port definitions (traits) for the tradedesk execution core.
//! These define the boundaries between domain logic and infrastructure.

mod clock;
mod error;
mod observer;
mod reference;

pub use clock::Clock;
pub use error::DeliveryError;
pub use observer::FillObserver;
pub use reference::InstrumentReference;
