use log::{debug, info};
use std::sync::Arc;
use tradedesk_core::{Order, Trade};
use tradedesk_ports::{Clock, InstrumentReference};

use crate::error::ExecutionError;
use crate::infrastructure::{FillNotifier, SharedStore};

/// Decides whether an order fills and settles it if so
///
/// Both intake and the sweeper call [`ExecutionEngine::attempt_execution`],
/// possibly for the same order at the same time. The state re-check, the
/// EXECUTED transition, the trade and the holding update happen under the
/// store lock, so an order produces at most one trade.
pub struct ExecutionEngine {
    store: SharedStore,
    reference: Arc<dyn InstrumentReference>,
    notifier: FillNotifier,
    clock: Arc<dyn Clock>,
}

impl ExecutionEngine {
    /// Create a new execution engine
    pub fn new(
        store: SharedStore,
        reference: Arc<dyn InstrumentReference>,
        notifier: FillNotifier,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            reference,
            notifier,
            clock,
        }
    }

    /// Try to fill `order` at the current reference price
    ///
    /// Returns `Ok(None)` when the order is not eligible at the current price,
    /// or when the stored order is no longer PLACED (already filled or
    /// cancelled by a concurrent caller). A fill that cannot be settled leaves
    /// the store untouched and the order PLACED.
    pub async fn attempt_execution(&self, order: &Order) -> Result<Option<Trade>, ExecutionError> {
        let reference_price = self
            .reference
            .reference_price(&order.symbol)
            .ok_or_else(|| ExecutionError::InstrumentNotFound(order.symbol.clone()))?;

        let Some(price) = order.execution_price(reference_price) else {
            debug!(
                "Order {} resting: {} {} limit {:?} vs reference {}",
                order.id, order.side, order.symbol, order.limit_price, reference_price
            );
            return Ok(None);
        };

        let trade = {
            let mut store = self.store.lock().await;

            let Some(mut executed) = store.get_order(&order.id).cloned() else {
                debug!("Order {} is not in the store, skipping", order.id);
                return Ok(None);
            };

            // Everything fallible runs before the store is touched
            let mut holding = store
                .holding(&executed.owner, &executed.symbol)
                .unwrap_or_default();
            let now = self.clock.now();
            if let Err(e) = executed.mark_executed(now) {
                debug!("Skipping execution: {}", e);
                return Ok(None);
            }
            holding
                .apply_fill(executed.side, executed.quantity, price)
                .map_err(|source| ExecutionError::SettlementOverflow {
                    order_id: executed.id,
                    source,
                })?;

            let trade = Trade::fill(&executed, price, now);
            store.put_holding(trade.owner.clone(), trade.symbol.clone(), holding);
            store.put_order(executed);
            store.append_trade(trade.clone());
            trade
        };

        info!(
            "Executed order {}: {} {} {} @ {} for {}",
            trade.order_id, trade.side, trade.quantity, trade.symbol, trade.price, trade.owner
        );

        let delivered = self.notifier.broadcast(&trade);
        debug!("Trade {} delivered to {} observers", trade.id, delivered);

        Ok(Some(trade))
    }
}
