use tradedesk_core::Trade;

use crate::DeliveryError;

/// Port for a consumer of fill events
///
/// `deliver` must not block: it is called once per fill from the executing task,
/// after the store lock has been released. Any error evicts the observer, and
/// a panic inside `deliver` is treated as [`DeliveryError::Panicked`].
pub trait FillObserver: Send + Sync {
    fn deliver(&self, trade: &Trade) -> Result<(), DeliveryError>;
}
