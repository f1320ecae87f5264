use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tradedesk_core::{Holding, Order, OrderId, OwnerId, Symbol, Trade};

/// In-memory record of orders, trades and holdings
///
/// `Store` does no synchronization of its own. Every access goes through
/// [`SharedStore::lock`], which is the single critical section of the system.
#[derive(Debug, Default)]
pub struct Store {
    orders: HashMap<OrderId, Order>,
    /// Append-only trade ledger
    trades: Vec<Trade>,
    /// Position in `trades` of each order's fill
    trade_index: HashMap<OrderId, usize>,
    holdings: HashMap<(OwnerId, Symbol), Holding>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_order(&self, order_id: &OrderId) -> Option<&Order> {
        self.orders.get(order_id)
    }

    pub fn order_mut(&mut self, order_id: &OrderId) -> Option<&mut Order> {
        self.orders.get_mut(order_id)
    }

    /// Insert or replace an order
    pub fn put_order(&mut self, order: Order) {
        self.orders.insert(order.id, order);
    }

    /// Copies of every order matching `predicate`, oldest first
    pub fn orders_snapshot<F>(&self, predicate: F) -> Vec<Order>
    where
        F: Fn(&Order) -> bool,
    {
        let mut orders: Vec<Order> = self
            .orders
            .values()
            .filter(|order| predicate(*order))
            .cloned()
            .collect();
        orders.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        orders
    }

    /// Append a trade to the ledger
    pub fn append_trade(&mut self, trade: Trade) {
        debug_assert!(
            !self.trade_index.contains_key(&trade.order_id),
            "order {} already has a trade",
            trade.order_id
        );
        self.trade_index.insert(trade.order_id, self.trades.len());
        self.trades.push(trade);
    }

    /// Copies of every trade matching `predicate`, in ledger order
    pub fn trades<F>(&self, predicate: F) -> Vec<Trade>
    where
        F: Fn(&Trade) -> bool,
    {
        self.trades
            .iter()
            .filter(|trade| predicate(*trade))
            .cloned()
            .collect()
    }

    /// The trade that filled `order_id`, if any
    pub fn trade_for_order(&self, order_id: &OrderId) -> Option<&Trade> {
        self.trade_index
            .get(order_id)
            .and_then(|&index| self.trades.get(index))
    }

    pub fn holding(&self, owner: &str, symbol: &str) -> Option<Holding> {
        self.holdings
            .get(&(owner.to_string(), symbol.to_string()))
            .copied()
    }

    pub fn put_holding(&mut self, owner: OwnerId, symbol: Symbol, holding: Holding) {
        self.holdings.insert((owner, symbol), holding);
    }

    /// All holdings of one owner, sorted by symbol
    pub fn holdings_for(&self, owner: &str) -> Vec<(Symbol, Holding)> {
        let mut holdings: Vec<(Symbol, Holding)> = self
            .holdings
            .iter()
            .filter(|((holder, _), _)| holder == owner)
            .map(|((_, symbol), holding)| (symbol.clone(), *holding))
            .collect();
        holdings.sort_by(|a, b| a.0.cmp(&b.0));
        holdings
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn trade_count(&self) -> usize {
        self.trades.len()
    }
}

/// The store behind the process-wide lock
///
/// Cloning shares the same store.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<Store>>,
}

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the critical section
    pub async fn lock(&self) -> MutexGuard<'_, Store> {
        self.inner.lock().await
    }
}
