//! Tradedesk Runner
//!
//! Wires the execution core into a running process:
//!
//! - **Config**: JSON configuration with defaults for every field
//! - **Bootstrap**: builds the exchange from the config and places seed orders
//! - **Service**: runs the sweeper and the fill log until shutdown
//!
//! ```text
//!   config.json ──▶ RunnerConfig ──▶ Bootstrap ──▶ Exchange
//!                                                    │
//!                         ctrl-c ──▶ run_until ──────┤
//!                                     ├─ sweeper task
//!                                     └─ fill log task
//! ```

pub mod bootstrap;
pub mod config;
pub mod service;

// Re-export main types
pub use bootstrap::{Bootstrap, BootstrapError};
pub use config::{ConfigError, InstrumentConfig, RunnerConfig, SeedOrderConfig};
pub use service::{RunSummary, run_until};
