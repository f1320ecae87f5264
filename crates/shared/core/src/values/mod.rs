use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Price value - uses Decimal for precision
pub type Price = Decimal;

/// Whole-unit quantity. Order quantities are strictly positive, holding
/// quantities are a signed net position.
pub type Quantity = i64;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Symbol identifier for a tradeable instrument
pub type Symbol = String;

/// Identifier of the user owning orders, trades and holdings
pub type OwnerId = String;
