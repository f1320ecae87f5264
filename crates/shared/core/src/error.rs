//! Domain errors

use thiserror::Error;

use crate::entities::{OrderId, OrderState, Side};
use crate::values::{Price, Quantity};

/// Reasons an order is rejected before it reaches the store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderValidationError {
    #[error("Quantity must be positive, got {0}")]
    NonPositiveQuantity(Quantity),

    #[error("Limit price is required for LIMIT orders")]
    MissingLimitPrice,

    #[error("Limit price is not accepted for MARKET orders")]
    UnexpectedLimitPrice,

    #[error("Limit price must be positive, got {0}")]
    NonPositiveLimitPrice(Price),

    #[error("Symbol must not be empty")]
    EmptySymbol,
}

/// Attempted lifecycle transition out of a terminal state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Order {order_id} is {state}, expected PLACED")]
pub struct OrderStateError {
    pub order_id: OrderId,
    pub state: OrderState,
}

/// A fill whose settlement would overflow the holding's quantity or cost basis
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Holding overflow applying {side} {quantity} @ {price}")]
pub struct HoldingOverflowError {
    pub side: Side,
    pub quantity: Quantity,
    pub price: Price,
}
