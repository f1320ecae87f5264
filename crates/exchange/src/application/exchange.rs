use log::info;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::Receiver;
use tradedesk_clock::SystemClock;
use tradedesk_ports::Clock;

use super::{ExecutionEngine, OrderDesk, RestingOrderSweeper, SweeperHandle};
use crate::infrastructure::{FillNotifier, InstrumentCatalog, ObserverId, SharedStore};
use crate::model::FillMessage;

/// Runtime settings of the exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeConfig {
    /// Time between sweeps of resting LIMIT orders
    pub sweep_interval: Duration,
    /// Buffer size of each channel-backed fill subscription
    pub observer_buffer: usize,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            sweep_interval: Duration::from_secs(2),
            observer_buffer: 256,
        }
    }
}

/// Wires the store, catalog, engine, notifier and desk together
pub struct Exchange {
    config: ExchangeConfig,
    store: SharedStore,
    catalog: InstrumentCatalog,
    notifier: FillNotifier,
    engine: Arc<ExecutionEngine>,
    desk: OrderDesk,
}

impl Exchange {
    /// Create an exchange running on wall-clock time
    pub fn new(config: ExchangeConfig, catalog: InstrumentCatalog) -> Self {
        Self::with_clock(config, catalog, Arc::new(SystemClock::new()))
    }

    /// Create an exchange with an explicit time source
    pub fn with_clock(
        config: ExchangeConfig,
        catalog: InstrumentCatalog,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let store = SharedStore::new();
        let notifier = FillNotifier::new();
        let engine = Arc::new(ExecutionEngine::new(
            store.clone(),
            Arc::new(catalog.clone()),
            notifier.clone(),
            clock.clone(),
        ));
        info!(
            "Exchange ready with {} instruments (clock: {})",
            catalog.len(),
            clock.name()
        );
        let desk = OrderDesk::new(store.clone(), catalog.clone(), engine.clone(), clock);

        Self {
            config,
            store,
            catalog,
            notifier,
            engine,
            desk,
        }
    }

    pub fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    pub fn desk(&self) -> &OrderDesk {
        &self.desk
    }

    pub fn engine(&self) -> Arc<ExecutionEngine> {
        Arc::clone(&self.engine)
    }

    pub fn notifier(&self) -> &FillNotifier {
        &self.notifier
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn catalog(&self) -> &InstrumentCatalog {
        &self.catalog
    }

    /// Subscribe to fills through a channel of the configured size
    pub fn subscribe(&self) -> (ObserverId, Receiver<FillMessage>) {
        self.notifier.subscribe(self.config.observer_buffer)
    }

    /// Build a sweeper over this exchange's store
    pub fn sweeper(&self) -> RestingOrderSweeper {
        RestingOrderSweeper::new(self.engine(), self.store.clone(), self.config.sweep_interval)
    }

    /// Start sweeping resting orders in the background
    pub fn start_sweeper(&self) -> SweeperHandle {
        self.sweeper().spawn()
    }
}
