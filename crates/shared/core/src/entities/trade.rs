use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Order, OrderId, Side};
use crate::values::{OwnerId, Price, Quantity, Symbol, Timestamp};

/// Unique identifier for a trade
pub type TradeId = Uuid;

/// Execution of a single order in full
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: TradeId,
    /// The order this trade filled (at most one trade per order)
    pub order_id: OrderId,
    pub symbol: Symbol,
    pub quantity: Quantity,
    pub price: Price,
    pub side: Side,
    pub timestamp: Timestamp,
    pub owner: OwnerId,
}

impl Trade {
    /// Create the trade that fills `order` at `price`
    pub fn fill(order: &Order, price: Price, timestamp: Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id: order.id,
            symbol: order.symbol.clone(),
            quantity: order.quantity,
            price,
            side: order.side,
            timestamp,
            owner: order.owner.clone(),
        }
    }

    /// Returns the notional value of the trade (price * quantity)
    pub fn notional(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}
