use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Side;
use crate::error::HoldingOverflowError;
use crate::values::{Price, Quantity};

/// Net position of one owner in one instrument
///
/// `quantity` is signed; selling more than is held leaves a short position.
/// `avg_price` is the cost basis and is only meaningful while `quantity > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Holding {
    pub quantity: Quantity,
    pub avg_price: Price,
}

impl Holding {
    /// Create a holding with an explicit cost basis
    pub fn new(quantity: Quantity, avg_price: Price) -> Self {
        Self {
            quantity,
            avg_price,
        }
    }

    /// Apply a fill of `quantity` units at `price`
    ///
    /// Buys re-weight the cost basis across the old and new quantity; a buy that
    /// lands the position at exactly zero resets it. Sells only reduce quantity.
    /// On overflow the holding is left unchanged.
    pub fn apply_fill(
        &mut self,
        side: Side,
        quantity: Quantity,
        price: Price,
    ) -> Result<(), HoldingOverflowError> {
        let overflow = || HoldingOverflowError {
            side,
            quantity,
            price,
        };

        match side {
            Side::Buy => {
                let new_quantity = self.quantity.checked_add(quantity).ok_or_else(overflow)?;
                let avg_price = if new_quantity == 0 {
                    Decimal::ZERO
                } else {
                    let held_cost = Decimal::from(self.quantity)
                        .checked_mul(self.avg_price)
                        .ok_or_else(overflow)?;
                    let fill_cost = Decimal::from(quantity)
                        .checked_mul(price)
                        .ok_or_else(overflow)?;
                    held_cost
                        .checked_add(fill_cost)
                        .and_then(|total| total.checked_div(Decimal::from(new_quantity)))
                        .ok_or_else(overflow)?
                };
                self.quantity = new_quantity;
                self.avg_price = avg_price;
            }
            Side::Sell => {
                self.quantity = self.quantity.checked_sub(quantity).ok_or_else(overflow)?;
            }
        }
        Ok(())
    }

    /// Value of the position at `reference_price`
    pub fn market_value(&self, reference_price: Price) -> Decimal {
        Decimal::from(self.quantity) * reference_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_weighted_average_cost() {
        let mut holding = Holding::default();
        holding.apply_fill(Side::Buy, 2, dec!(100)).unwrap();
        holding.apply_fill(Side::Buy, 3, dec!(200)).unwrap();

        assert_eq!(holding, Holding::new(5, dec!(160)));
    }

    #[test]
    fn test_sell_keeps_cost_basis() {
        let mut holding = Holding::new(5, dec!(160));
        holding.apply_fill(Side::Sell, 2, dec!(999)).unwrap();

        assert_eq!(holding, Holding::new(3, dec!(160)));
    }

    #[test]
    fn test_short_position_is_accepted() {
        let mut holding = Holding::default();
        holding.apply_fill(Side::Sell, 4, dec!(50)).unwrap();

        assert_eq!(holding.quantity, -4);
        assert_eq!(holding.avg_price, Decimal::ZERO);
    }

    #[test]
    fn test_buy_back_to_flat_resets_basis() {
        let mut holding = Holding::new(-2, dec!(10));
        holding.apply_fill(Side::Buy, 2, dec!(12)).unwrap();

        assert_eq!(holding, Holding::default());
    }

    #[test]
    fn test_market_value() {
        let holding = Holding::new(3, dec!(160));
        assert_eq!(holding.market_value(dec!(150.5)), dec!(451.5));
    }

    #[test]
    fn test_overflow_leaves_holding_unchanged() {
        let mut holding = Holding::new(1, dec!(10));
        let err = holding
            .apply_fill(Side::Buy, 2, Decimal::MAX)
            .unwrap_err();
        assert_eq!(err.price, Decimal::MAX);
        assert_eq!(holding, Holding::new(1, dec!(10)));

        let mut full = Holding::new(Quantity::MAX, dec!(1));
        assert!(full.apply_fill(Side::Buy, 1, dec!(1)).is_err());
        assert_eq!(full, Holding::new(Quantity::MAX, dec!(1)));

        let mut short = Holding::new(Quantity::MIN, Decimal::ZERO);
        assert!(short.apply_fill(Side::Sell, 1, dec!(1)).is_err());
        assert_eq!(short.quantity, Quantity::MIN);
    }
}
