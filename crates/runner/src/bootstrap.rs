//! Bootstrap - building the exchange from configuration
//!
//! Validates the configuration, creates the exchange over the configured
//! catalog and places the seed orders in file order.

use log::info;
use std::sync::Arc;
use thiserror::Error;
use tradedesk_exchange::{Exchange, OrderError, OrderOutcome};
use tradedesk_ports::Clock;

use crate::config::{ConfigError, RunnerConfig};

/// Startup failures
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Seed order #{index} for {owner} rejected: {source}")]
    SeedOrder {
        index: usize,
        owner: String,
        #[source]
        source: OrderError,
    },
}

/// A ready exchange and the outcome of its seed orders
pub struct Bootstrap {
    pub config: RunnerConfig,
    pub exchange: Exchange,
    /// One outcome per configured seed order
    pub seeded: Vec<OrderOutcome>,
}

impl Bootstrap {
    /// Bootstrap with the default configuration
    pub async fn new() -> Result<Self, BootstrapError> {
        Self::with_config(RunnerConfig::default()).await
    }

    /// Bootstrap on wall-clock time
    pub async fn with_config(config: RunnerConfig) -> Result<Self, BootstrapError> {
        config.validate()?;
        let exchange = Exchange::new(config.exchange_config(), config.catalog());
        Self::seed(config, exchange).await
    }

    /// Bootstrap with an explicit time source
    pub async fn with_clock(
        config: RunnerConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, BootstrapError> {
        config.validate()?;
        let exchange = Exchange::with_clock(config.exchange_config(), config.catalog(), clock);
        Self::seed(config, exchange).await
    }

    async fn seed(config: RunnerConfig, exchange: Exchange) -> Result<Self, BootstrapError> {
        info!(
            "Bootstrapping {} with {} instruments and {} seed orders",
            config.name,
            exchange.catalog().len(),
            config.seed_orders.len()
        );

        let mut seeded = Vec::with_capacity(config.seed_orders.len());
        for (index, seed) in config.seed_orders.iter().enumerate() {
            let outcome = exchange
                .desk()
                .place_order(&seed.owner, seed.command())
                .await
                .map_err(|source| BootstrapError::SeedOrder {
                    index,
                    owner: seed.owner.clone(),
                    source,
                })?;
            seeded.push(outcome);
        }

        let filled = seeded.iter().filter(|o| o.is_filled()).count();
        info!(
            "Seed orders placed: {} filled, {} resting",
            filled,
            seeded.len() - filled
        );

        Ok(Self {
            config,
            exchange,
            seeded,
        })
    }
}
