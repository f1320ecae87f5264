mod desk;
mod engine;
mod exchange;
mod sweeper;

pub use desk::OrderDesk;
pub use engine::ExecutionEngine;
pub use exchange::{Exchange, ExchangeConfig};
pub use sweeper::{RestingOrderSweeper, SweepReport, SweeperHandle};
