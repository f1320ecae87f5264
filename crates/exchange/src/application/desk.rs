use log::info;
use rust_decimal::Decimal;
use std::sync::Arc;
use tradedesk_core::{Instrument, Order, OrderId, Trade};
use tradedesk_ports::{Clock, InstrumentReference};

use super::ExecutionEngine;
use crate::error::{CancelError, OrderAccessError, OrderError};
use crate::infrastructure::{InstrumentCatalog, SharedStore};
use crate::model::{HoldingView, OrderOutcome, PlaceOrderCommand, PortfolioView};

/// Owner-facing entry point for placing, cancelling and querying orders
pub struct OrderDesk {
    store: SharedStore,
    catalog: InstrumentCatalog,
    engine: Arc<ExecutionEngine>,
    clock: Arc<dyn Clock>,
}

impl OrderDesk {
    /// Create a new order desk
    pub fn new(
        store: SharedStore,
        catalog: InstrumentCatalog,
        engine: Arc<ExecutionEngine>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            catalog,
            engine,
            clock,
        }
    }

    /// Validate, store and immediately attempt a new order
    ///
    /// Unknown symbols are rejected before anything is stored. The order keeps
    /// the catalog's spelling of the symbol. A fill that cannot be settled is
    /// returned as an error; the order stays PLACED and can be cancelled.
    pub async fn place_order(
        &self,
        owner: &str,
        command: PlaceOrderCommand,
    ) -> Result<OrderOutcome, OrderError> {
        let mut order = Order::new(
            owner,
            command.symbol.trim(),
            command.side,
            command.style,
            command.quantity,
            command.limit_price,
            self.clock.now(),
        );
        order.validate()?;

        let instrument = self
            .catalog
            .instrument(&order.symbol)
            .ok_or_else(|| OrderError::InstrumentNotFound(order.symbol.clone()))?;
        order.symbol = instrument.symbol;

        self.store.lock().await.put_order(order.clone());
        info!(
            "Placed order {} for {}: {} {} {} {}",
            order.id, order.owner, order.style, order.side, order.quantity, order.symbol
        );

        let executed = self.engine.attempt_execution(&order).await?;

        // A concurrent sweep may have filled the order after our own attempt
        let store = self.store.lock().await;
        let current = store.get_order(&order.id).cloned().unwrap_or(order);
        let trade = executed.or_else(|| store.trade_for_order(&current.id).cloned());

        Ok(match trade {
            Some(trade) => OrderOutcome::Filled {
                order: current,
                trade,
            },
            None => OrderOutcome::Resting { order: current },
        })
    }

    /// Cancel a PLACED order owned by `owner`
    pub async fn cancel_order(&self, owner: &str, order_id: OrderId) -> Result<Order, CancelError> {
        let mut store = self.store.lock().await;
        let order = store
            .order_mut(&order_id)
            .ok_or(CancelError::OrderNotFound(order_id))?;

        if order.owner != owner {
            return Err(CancelError::NotOwner(order_id));
        }

        order
            .mark_cancelled()
            .map_err(|e| CancelError::AlreadyTerminal {
                order_id,
                state: e.state,
            })?;

        info!("Cancelled order {} for {}", order_id, owner);
        Ok(order.clone())
    }

    /// Look up one of `owner`'s orders
    pub async fn order(&self, owner: &str, order_id: OrderId) -> Result<Order, OrderAccessError> {
        let store = self.store.lock().await;
        let order = store
            .get_order(&order_id)
            .ok_or(OrderAccessError::OrderNotFound(order_id))?;

        if order.owner != owner {
            return Err(OrderAccessError::NotOwner(order_id));
        }
        Ok(order.clone())
    }

    /// `owner`'s trades in execution order
    pub async fn trades(&self, owner: &str) -> Vec<Trade> {
        self.store.lock().await.trades(|trade| trade.owner == owner)
    }

    /// `owner`'s holdings valued at current reference prices
    pub async fn portfolio(&self, owner: &str) -> PortfolioView {
        let holdings = self.store.lock().await.holdings_for(owner);

        let holdings = holdings
            .into_iter()
            .map(|(symbol, holding)| {
                let current_value = self
                    .catalog
                    .reference_price(&symbol)
                    .map(|price| holding.market_value(price))
                    .unwrap_or(Decimal::ZERO);
                HoldingView {
                    symbol,
                    quantity: holding.quantity,
                    avg_price: holding.avg_price,
                    current_value,
                }
            })
            .collect();

        PortfolioView {
            owner: owner.to_string(),
            holdings,
        }
    }

    /// All listed instruments, sorted by symbol
    pub fn instruments(&self) -> Vec<Instrument> {
        self.catalog.all()
    }

    /// Case-insensitive instrument lookup
    pub fn instrument(&self, symbol: &str) -> Option<Instrument> {
        self.catalog.instrument(symbol)
    }
}
