//! Runner integration tests
//!
//! Tests the process wiring end to end:
//! - Configuration file loading
//! - Bootstrap with seed orders
//! - Service lifecycle (sweeper + fill log) until shutdown

use rust_decimal_macros::dec;
use std::sync::Arc;
use std::time::Duration;
use tradedesk_clock::ManualClock;
use tradedesk_core::{OrderState, Side};
use tradedesk_exchange::PlaceOrderCommand;
use tradedesk_runner::{Bootstrap, RunnerConfig, run_until};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Test that a config file drives the catalog and seed orders
#[tokio::test]
async fn test_bootstrap_from_config_file() {
    init_logging();
    let path = std::env::temp_dir().join(format!("tradedesk-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{
            "name": "File Venue",
            "sweep_interval_ms": 100,
            "instruments": [
                {"symbol": "SBIN", "reference_price": "780.25"},
                {"symbol": "TCS", "reference_price": "3800.00"}
            ],
            "seed_orders": [
                {"owner": "seed", "symbol": "sbin", "side": "BUY", "quantity": 10},
                {"owner": "seed", "symbol": "TCS", "side": "SELL", "style": "LIMIT", "quantity": 1, "limit_price": "4000"}
            ]
        }"#,
    )
    .unwrap();

    let config = RunnerConfig::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let bootstrap = Bootstrap::with_config(config).await.unwrap();
    assert_eq!(bootstrap.config.name, "File Venue");
    assert_eq!(bootstrap.exchange.catalog().len(), 2);
    assert_eq!(bootstrap.seeded.len(), 2);

    let portfolio = bootstrap.exchange.desk().portfolio("seed").await;
    let sbin = portfolio.holding("SBIN").unwrap();
    assert_eq!(sbin.quantity, 10);
    assert_eq!(sbin.current_value, dec!(7802.50));

    assert_eq!(bootstrap.seeded[1].order().state, OrderState::Placed);
}

/// Test that the service logs fills made while it runs and stops cleanly
#[tokio::test]
async fn test_service_runs_until_shutdown() {
    init_logging();
    let mut config = RunnerConfig::default();
    config.sweep_interval_ms = 10;
    config.seed_orders = vec![];

    let bootstrap = Bootstrap::with_clock(config, Arc::new(ManualClock::new()))
        .await
        .unwrap();
    let exchange = &bootstrap.exchange;

    let summary = run_until(exchange, async {
        let desk = exchange.desk();
        desk.place_order("alice", PlaceOrderCommand::market("TCS", Side::Buy, 1))
            .await
            .unwrap();
        desk.place_order("bob", PlaceOrderCommand::market("INFY", Side::Sell, 3))
            .await
            .unwrap();
        desk.place_order("bob", PlaceOrderCommand::limit("INFY", Side::Buy, 1, dec!(1000)))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
    })
    .await
    .unwrap();

    assert_eq!(summary.fills_logged, 2);
    assert!(exchange.notifier().is_empty());
    assert_eq!(exchange.desk().trades("bob").await.len(), 1);
}

/// Test that fills before the service starts are not replayed
#[tokio::test]
async fn test_seed_fills_are_not_replayed() {
    init_logging();
    let config = RunnerConfig::from_json(
        r#"{"seed_orders": [{"owner": "seed", "symbol": "RELIANCE", "side": "BUY", "quantity": 1}]}"#,
    )
    .unwrap();

    let bootstrap = Bootstrap::with_config(config).await.unwrap();
    assert!(bootstrap.seeded[0].is_filled());

    let summary = run_until(&bootstrap.exchange, async {}).await.unwrap();
    assert_eq!(summary.fills_logged, 0);
}
