use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tradedesk_core::{Order, OrderStyle, OwnerId, Price, Quantity, Side, Symbol, Trade};

/// Request to place a new order on behalf of an owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceOrderCommand {
    pub symbol: Symbol,
    pub side: Side,
    pub style: OrderStyle,
    pub quantity: Quantity,
    #[serde(default)]
    pub limit_price: Option<Price>,
}

impl PlaceOrderCommand {
    /// Create a market order request
    pub fn market(symbol: impl Into<Symbol>, side: Side, quantity: Quantity) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            style: OrderStyle::Market,
            quantity,
            limit_price: None,
        }
    }

    /// Create a limit order request
    pub fn limit(
        symbol: impl Into<Symbol>,
        side: Side,
        quantity: Quantity,
        limit_price: Price,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            style: OrderStyle::Limit,
            quantity,
            limit_price: Some(limit_price),
        }
    }
}

/// Result of placing an order
#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    /// The order filled immediately
    Filled { order: Order, trade: Trade },
    /// The order is resting and will be re-attempted by the sweeper
    Resting { order: Order },
}

impl OrderOutcome {
    pub fn order(&self) -> &Order {
        match self {
            OrderOutcome::Filled { order, .. } | OrderOutcome::Resting { order } => order,
        }
    }

    pub fn trade(&self) -> Option<&Trade> {
        match self {
            OrderOutcome::Filled { trade, .. } => Some(trade),
            OrderOutcome::Resting { .. } => None,
        }
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, OrderOutcome::Filled { .. })
    }
}

/// Envelope pushed to fill observers
///
/// Serializes as `{"type": "trade", "trade": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FillMessage {
    Trade { trade: Trade },
}

impl FillMessage {
    pub fn trade(&self) -> &Trade {
        match self {
            FillMessage::Trade { trade } => trade,
        }
    }
}

impl From<Trade> for FillMessage {
    fn from(trade: Trade) -> Self {
        FillMessage::Trade { trade }
    }
}

/// One line of a portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingView {
    pub symbol: Symbol,
    pub quantity: Quantity,
    pub avg_price: Price,
    /// quantity x reference price, zero when the instrument is not listed
    pub current_value: Decimal,
}

/// Holdings of one owner, sorted by symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioView {
    pub owner: OwnerId,
    pub holdings: Vec<HoldingView>,
}

impl PortfolioView {
    /// Sum of `current_value` across all holdings
    pub fn total_value(&self) -> Decimal {
        self.holdings.iter().map(|h| h.current_value).sum()
    }

    pub fn holding(&self, symbol: &str) -> Option<&HoldingView> {
        self.holdings.iter().find(|h| h.symbol == symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fill_message_envelope() {
        let order = Order::market("alice", "TCS", Side::Buy, 2, Utc::now());
        let trade = Trade::fill(&order, dec!(3800.00), Utc::now());
        let message = FillMessage::from(trade.clone());

        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["type"], "trade");
        assert_eq!(json["trade"]["symbol"], "TCS");
        assert_eq!(json["trade"]["side"], "BUY");
        assert_eq!(json["trade"]["quantity"], 2);
        assert_eq!(message.trade(), &trade);
    }

    #[test]
    fn test_command_defaults_limit_price() {
        let json = r#"{"symbol":"infy","side":"SELL","style":"MARKET","quantity":3}"#;
        let command: PlaceOrderCommand = serde_json::from_str(json).unwrap();
        assert_eq!(command, PlaceOrderCommand::market("infy", Side::Sell, 3));
    }

    #[test]
    fn test_portfolio_total() {
        let view = PortfolioView {
            owner: "alice".to_string(),
            holdings: vec![
                HoldingView {
                    symbol: "INFY".to_string(),
                    quantity: 2,
                    avg_price: dec!(1400),
                    current_value: dec!(3001.00),
                },
                HoldingView {
                    symbol: "TCS".to_string(),
                    quantity: 1,
                    avg_price: dec!(3700),
                    current_value: dec!(3800.00),
                },
            ],
        };
        assert_eq!(view.total_value(), dec!(6801.00));
        assert_eq!(view.holding("TCS").map(|h| h.quantity), Some(1));
    }
}
