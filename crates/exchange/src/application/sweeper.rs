use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{MissedTickBehavior, interval};
use tradedesk_core::Order;

use super::ExecutionEngine;
use crate::infrastructure::SharedStore;

/// Outcome counts of one sweep cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Resting LIMIT orders in the cycle's snapshot
    pub examined: usize,
    /// Orders that produced a trade this cycle
    pub filled: usize,
    /// Attempts that produced no trade: the price was not yet reachable, or the order was no longer PLACED
    pub resting: usize,
    /// Orders skipped because the engine returned an error
    pub failed: usize,
}

/// Periodically re-attempts every resting LIMIT order
pub struct RestingOrderSweeper {
    engine: Arc<ExecutionEngine>,
    store: SharedStore,
    interval: Duration,
}

impl RestingOrderSweeper {
    /// Create a new sweeper
    pub fn new(engine: Arc<ExecutionEngine>, store: SharedStore, interval: Duration) -> Self {
        Self {
            engine,
            store,
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run a single cycle over a point-in-time snapshot of resting orders
    ///
    /// An error on one order is logged and does not stop the cycle.
    pub async fn sweep_once(&self) -> SweepReport {
        let candidates = self.store.lock().await.orders_snapshot(Order::is_resting_limit);

        let mut report = SweepReport {
            examined: candidates.len(),
            ..Default::default()
        };

        for order in &candidates {
            match self.engine.attempt_execution(order).await {
                Ok(Some(_)) => report.filled += 1,
                Ok(None) => report.resting += 1,
                Err(e) => {
                    warn!("Sweep skipped order {}: {}", order.id, e);
                    report.failed += 1;
                }
            }
        }

        debug!(
            "Sweep: examined={} filled={} resting={} failed={}",
            report.examined, report.filled, report.resting, report.failed
        );
        report
    }

    /// Sweep on every tick until `shutdown` flips to true or its sender is dropped
    ///
    /// The first tick fires immediately. Shutdown is only observed between
    /// cycles, so a cycle in progress always completes.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        info!("Starting resting-order sweeper with interval of {:?}", self.interval);

        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            if *shutdown.borrow_and_update() {
                break;
            }

            tokio::select! {
                biased;

                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    self.sweep_once().await;
                }
            }
        }

        info!("Resting-order sweeper stopped");
    }

    /// Run the sweeper on its own task
    pub fn spawn(self) -> SweeperHandle {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(async move { self.run(shutdown_rx).await });

        SweeperHandle {
            shutdown_tx,
            task,
        }
    }
}

/// Handle to a running sweeper task
pub struct SweeperHandle {
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SweeperHandle {
    /// Signal the sweeper to stop without waiting for it
    pub fn stop(&self) {
        self.shutdown_tx.send_replace(true);
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the sweeper and wait for the in-flight cycle to finish
    pub async fn shutdown(self) -> Result<(), JoinError> {
        self.stop();
        self.task.await
    }
}
