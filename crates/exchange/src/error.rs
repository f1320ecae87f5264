use thiserror::Error;
use tradedesk_core::{HoldingOverflowError, OrderId, OrderState, OrderValidationError, Symbol};

/// Errors raised by the execution engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("Instrument not found: {0}")]
    InstrumentNotFound(Symbol),

    #[error("Order {order_id} cannot be settled: {source}")]
    SettlementOverflow {
        order_id: OrderId,
        #[source]
        source: HoldingOverflowError,
    },
}

/// Errors raised while accepting a new order
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Invalid order: {0}")]
    Invalid(#[from] OrderValidationError),

    #[error("Instrument not found: {0}")]
    InstrumentNotFound(Symbol),

    #[error("Order {order_id} cannot be settled: {source}")]
    SettlementOverflow {
        order_id: OrderId,
        #[source]
        source: HoldingOverflowError,
    },
}

impl From<ExecutionError> for OrderError {
    fn from(err: ExecutionError) -> Self {
        match err {
            ExecutionError::InstrumentNotFound(symbol) => OrderError::InstrumentNotFound(symbol),
            ExecutionError::SettlementOverflow { order_id, source } => {
                OrderError::SettlementOverflow { order_id, source }
            }
        }
    }
}

/// Reasons a cancellation is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CancelError {
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    #[error("Order {0} belongs to another owner")]
    NotOwner(OrderId),

    #[error("Order {order_id} is already {state}")]
    AlreadyTerminal { order_id: OrderId, state: OrderState },
}

/// Reasons an owner-scoped order lookup fails
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderAccessError {
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    #[error("Order {0} belongs to another owner")]
    NotOwner(OrderId),
}
