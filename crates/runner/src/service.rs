//! Service - the long-running part of the process
//!
//! Starts the resting-order sweeper and a fill log subscriber, then waits for
//! the shutdown signal and stops both in order.

use log::{info, warn};
use std::future::Future;
use tokio::task::JoinError;
use tradedesk_exchange::Exchange;

/// What happened while the service was running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Fills received by the fill log
    pub fills_logged: usize,
}

/// Run the sweeper and fill log until `shutdown` completes
///
/// The sweeper finishes its in-flight cycle before this returns, and the fill
/// log drains whatever it had already received.
pub async fn run_until<F>(exchange: &Exchange, shutdown: F) -> Result<RunSummary, JoinError>
where
    F: Future<Output = ()>,
{
    let (observer_id, mut fills) = exchange.subscribe();
    let fill_log = tokio::spawn(async move {
        let mut logged: usize = 0;
        while let Some(message) = fills.recv().await {
            match serde_json::to_string(&message) {
                Ok(json) => info!("Fill: {}", json),
                Err(e) => warn!("Failed to encode fill {}: {}", message.trade().id, e),
            }
            logged += 1;
        }
        logged
    });

    let sweeper = exchange.start_sweeper();
    info!("Service running");

    shutdown.await;
    info!("Shutdown requested, stopping sweeper");

    sweeper.shutdown().await?;
    exchange.notifier().leave(&observer_id);
    let fills_logged = fill_log.await?;

    info!("Service stopped after {} fills", fills_logged);
    Ok(RunSummary { fills_logged })
}
