//! Configuration loading for the tradedesk runner
//!
//! Supports JSON configuration files for:
//! - The instrument catalog and its reference prices
//! - Sweep interval and fill subscription buffer size
//! - Seed orders placed at startup

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tradedesk_core::{Instrument, InstrumentType, OrderStyle, OwnerId, Price, Quantity, Side};
use tradedesk_exchange::{ExchangeConfig, InstrumentCatalog, PlaceOrderCommand};

/// Root configuration for the runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Venue name, used in logs
    #[serde(default = "default_name")]
    pub name: String,

    /// Milliseconds between sweeps of resting LIMIT orders
    #[serde(default = "default_sweep_interval_ms")]
    pub sweep_interval_ms: u64,

    /// Buffer size of each fill subscription
    #[serde(default = "default_observer_buffer")]
    pub observer_buffer: usize,

    /// Listed instruments
    #[serde(default = "default_instruments")]
    pub instruments: Vec<InstrumentConfig>,

    /// Orders placed once the exchange is up
    #[serde(default)]
    pub seed_orders: Vec<SeedOrderConfig>,
}

fn default_name() -> String {
    "Tradedesk".to_string()
}

fn default_sweep_interval_ms() -> u64 {
    2000
}

fn default_observer_buffer() -> usize {
    256
}

fn default_instruments() -> Vec<InstrumentConfig> {
    InstrumentCatalog::default_instruments()
        .into_iter()
        .map(InstrumentConfig::from)
        .collect()
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            sweep_interval_ms: default_sweep_interval_ms(),
            observer_buffer: default_observer_buffer(),
            instruments: default_instruments(),
            seed_orders: Vec::new(),
        }
    }
}

impl RunnerConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Replace the sweep interval with a raw millisecond value (e.g. from the environment)
    pub fn override_sweep_interval(&mut self, raw: &str) -> Result<(), ConfigError> {
        self.sweep_interval_ms = raw.trim().parse().map_err(|_| {
            ConfigError::Invalid(format!("sweep interval must be milliseconds, got '{}'", raw))
        })?;
        Ok(())
    }

    /// Check the configuration can start an exchange
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sweep_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "sweep_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.observer_buffer == 0 {
            return Err(ConfigError::Invalid(
                "observer_buffer must be greater than zero".to_string(),
            ));
        }
        if self.instruments.is_empty() {
            return Err(ConfigError::Invalid("no instruments configured".to_string()));
        }

        let mut seen = HashSet::new();
        for instrument in &self.instruments {
            if instrument.symbol.trim().is_empty() {
                return Err(ConfigError::Invalid("instrument symbol is empty".to_string()));
            }
            if instrument.reference_price <= Decimal::ZERO {
                return Err(ConfigError::Invalid(format!(
                    "reference price of {} must be positive, got {}",
                    instrument.symbol, instrument.reference_price
                )));
            }
            if !seen.insert(Instrument::key(&instrument.symbol)) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate instrument {}",
                    instrument.symbol
                )));
            }
        }

        Ok(())
    }

    pub fn exchange_config(&self) -> ExchangeConfig {
        ExchangeConfig {
            sweep_interval: Duration::from_millis(self.sweep_interval_ms),
            observer_buffer: self.observer_buffer,
        }
    }

    pub fn catalog(&self) -> InstrumentCatalog {
        InstrumentCatalog::new(self.instruments.iter().cloned().map(Instrument::from))
    }
}

/// One listed instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentConfig {
    pub symbol: String,

    #[serde(default = "default_exchange")]
    pub exchange: String,

    #[serde(default = "default_instrument_type")]
    pub instrument_type: InstrumentType,

    pub reference_price: Price,
}

fn default_exchange() -> String {
    "NSE".to_string()
}

fn default_instrument_type() -> InstrumentType {
    InstrumentType::Equity
}

impl From<Instrument> for InstrumentConfig {
    fn from(instrument: Instrument) -> Self {
        Self {
            symbol: instrument.symbol,
            exchange: instrument.exchange,
            instrument_type: instrument.instrument_type,
            reference_price: instrument.reference_price,
        }
    }
}

impl From<InstrumentConfig> for Instrument {
    fn from(config: InstrumentConfig) -> Self {
        Instrument::new(
            config.symbol.trim().to_ascii_uppercase(),
            config.exchange,
            config.instrument_type,
            config.reference_price,
        )
    }
}

/// An order placed at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedOrderConfig {
    pub owner: OwnerId,
    pub symbol: String,
    pub side: Side,
    #[serde(default = "default_style")]
    pub style: OrderStyle,
    pub quantity: Quantity,
    #[serde(default)]
    pub limit_price: Option<Price>,
}

fn default_style() -> OrderStyle {
    OrderStyle::Market
}

impl SeedOrderConfig {
    pub fn command(&self) -> PlaceOrderCommand {
        PlaceOrderCommand {
            symbol: self.symbol.clone(),
            side: self.side,
            style: self.style,
            quantity: self.quantity,
            limit_price: self.limit_price,
        }
    }
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = RunnerConfig::from_json("{}").unwrap();
        assert_eq!(config.sweep_interval_ms, 2000);
        assert_eq!(config.observer_buffer, 256);
        assert_eq!(config.instruments.len(), 3);
        assert!(config.seed_orders.is_empty());
        assert!(config.validate().is_ok());

        let exchange = config.exchange_config();
        assert_eq!(exchange.sweep_interval, Duration::from_secs(2));
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "name": "Test Venue",
            "sweep_interval_ms": 500,
            "instruments": [
                {"symbol": "hdfc", "reference_price": "1650.00"},
                {"symbol": "NIFTYBEES", "exchange": "NSE", "instrument_type": "ETF", "reference_price": "245.10"}
            ],
            "seed_orders": [
                {"owner": "demo", "symbol": "HDFC", "side": "BUY", "quantity": 5},
                {"owner": "demo", "symbol": "HDFC", "side": "SELL", "style": "LIMIT", "quantity": 2, "limit_price": "1700"}
            ]
        }"#;

        let config = RunnerConfig::from_json(json).unwrap();
        assert_eq!(config.name, "Test Venue");
        assert_eq!(config.instruments[0].exchange, "NSE");
        assert_eq!(config.instruments[1].instrument_type, InstrumentType::Etf);
        assert_eq!(
            config.seed_orders[1].command(),
            PlaceOrderCommand::limit("HDFC", Side::Sell, 2, dec!(1700))
        );

        let catalog = config.catalog();
        assert_eq!(catalog.all()[0].symbol, "HDFC");
    }

    #[test]
    fn test_validation_failures() {
        let mut config = RunnerConfig::default();
        config.sweep_interval_ms = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = RunnerConfig::default();
        config.observer_buffer = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::Invalid(
                "observer_buffer must be greater than zero".to_string()
            ))
        );

        let mut config = RunnerConfig::default();
        config.instruments.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = RunnerConfig::default();
        config.instruments[0].reference_price = dec!(0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = RunnerConfig::default();
        let mut duplicate = config.instruments[1].clone();
        duplicate.symbol = duplicate.symbol.to_lowercase();
        config.instruments.push(duplicate);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_sweep_interval_override() {
        let mut config = RunnerConfig::default();
        config.override_sweep_interval(" 250 ").unwrap();
        assert_eq!(config.sweep_interval_ms, 250);

        assert!(config.override_sweep_interval("fast").is_err());
        assert_eq!(config.sweep_interval_ms, 250);
    }

    #[test]
    fn test_parse_and_io_errors() {
        assert!(matches!(
            RunnerConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            RunnerConfig::from_file("/nonexistent/tradedesk.json"),
            Err(ConfigError::Io { .. })
        ));
    }
}
