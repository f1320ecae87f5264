use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{OrderState, OrderStyle, Side};
use crate::error::{OrderStateError, OrderValidationError};
use crate::values::{OwnerId, Price, Quantity, Symbol, Timestamp};

/// Unique identifier for an order
pub type OrderId = Uuid;

/// Full order details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub symbol: Symbol,
    pub side: Side,
    pub style: OrderStyle,
    pub quantity: Quantity,
    /// Present iff `style` is `Limit`
    pub limit_price: Option<Price>,
    pub state: OrderState,
    pub created_at: Timestamp,
    /// Present iff `state` is `Executed`
    pub executed_at: Option<Timestamp>,
    pub owner: OwnerId,
}

impl Order {
    /// Create a new order in the `Placed` state
    pub fn new(
        owner: impl Into<OwnerId>,
        symbol: impl Into<Symbol>,
        side: Side,
        style: OrderStyle,
        quantity: Quantity,
        limit_price: Option<Price>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol: symbol.into(),
            side,
            style,
            quantity,
            limit_price,
            state: OrderState::Placed,
            created_at,
            executed_at: None,
            owner: owner.into(),
        }
    }

    /// Create a market order
    pub fn market(
        owner: impl Into<OwnerId>,
        symbol: impl Into<Symbol>,
        side: Side,
        quantity: Quantity,
        created_at: Timestamp,
    ) -> Self {
        Self::new(
            owner,
            symbol,
            side,
            OrderStyle::Market,
            quantity,
            None,
            created_at,
        )
    }

    /// Create a limit order
    pub fn limit(
        owner: impl Into<OwnerId>,
        symbol: impl Into<Symbol>,
        side: Side,
        quantity: Quantity,
        limit_price: Price,
        created_at: Timestamp,
    ) -> Self {
        Self::new(
            owner,
            symbol,
            side,
            OrderStyle::Limit,
            quantity,
            Some(limit_price),
            created_at,
        )
    }

    /// Validate the order based on style requirements
    pub fn validate(&self) -> Result<(), OrderValidationError> {
        if self.symbol.trim().is_empty() {
            return Err(OrderValidationError::EmptySymbol);
        }
        if self.quantity <= 0 {
            return Err(OrderValidationError::NonPositiveQuantity(self.quantity));
        }
        match (self.style, self.limit_price) {
            (OrderStyle::Market, None) => Ok(()),
            (OrderStyle::Market, Some(_)) => Err(OrderValidationError::UnexpectedLimitPrice),
            (OrderStyle::Limit, None) => Err(OrderValidationError::MissingLimitPrice),
            (OrderStyle::Limit, Some(price)) if price <= Price::ZERO => {
                Err(OrderValidationError::NonPositiveLimitPrice(price))
            }
            (OrderStyle::Limit, Some(_)) => Ok(()),
        }
    }

    /// Price this order would execute at against `reference_price`, if eligible
    ///
    /// Market orders always execute at the reference price. Limit orders execute
    /// at their own limit once the reference price reaches it (inclusive).
    pub fn execution_price(&self, reference_price: Price) -> Option<Price> {
        match (self.style, self.side, self.limit_price) {
            (OrderStyle::Market, _, _) => Some(reference_price),

            // Buy limit fills once the reference is at or below the limit
            (OrderStyle::Limit, Side::Buy, Some(limit)) if limit >= reference_price => Some(limit),

            // Sell limit fills once the reference is at or above the limit
            (OrderStyle::Limit, Side::Sell, Some(limit)) if limit <= reference_price => {
                Some(limit)
            }

            _ => None,
        }
    }

    /// Returns true for limit orders still waiting to fill
    pub fn is_resting_limit(&self) -> bool {
        self.style == OrderStyle::Limit && self.state.is_placed()
    }

    /// Move a placed order to `Executed`
    pub fn mark_executed(&mut self, at: Timestamp) -> Result<(), OrderStateError> {
        self.ensure_placed()?;
        self.state = OrderState::Executed;
        self.executed_at = Some(at);
        Ok(())
    }

    /// Move a placed order to `Cancelled`
    pub fn mark_cancelled(&mut self) -> Result<(), OrderStateError> {
        self.ensure_placed()?;
        self.state = OrderState::Cancelled;
        self.executed_at = None;
        Ok(())
    }

    fn ensure_placed(&self) -> Result<(), OrderStateError> {
        if self.state.is_placed() {
            Ok(())
        } else {
            Err(OrderStateError {
                order_id: self.id,
                state: self.state,
            })
        }
    }
}
