//! Tradedesk Exchange
//!
//! Execution and settlement for a single venue:
//!
//! - **Execution Engine**: decides whether an order fills at the reference price
//!   and, if so, records the trade and updates holdings in one critical section
//! - **Resting-Order Sweeper**: re-attempts resting LIMIT orders on a fixed interval
//! - **Fill Notifier**: pushes every new trade to registered observers
//! - **Store**: orders, trades and holdings behind one process-wide lock
//!
//! ```text
//!   place_order ──┐                 ┌── sweeper tick
//!                 ▼                 ▼
//!              ┌───────────────────────┐      ┌───────────────┐
//!              │   ExecutionEngine     │─────▶│ FillNotifier  │──▶ observers
//!              └───────────┬───────────┘      └───────────────┘
//!                          │ lock
//!                          ▼
//!              ┌───────────────────────┐
//!              │  Store (orders,       │
//!              │  trades, holdings)    │
//!              └───────────────────────┘
//! ```

// Application layer
pub mod application;

// Infrastructure layer
pub mod infrastructure;

// Cross-cutting concerns
pub mod error;
pub mod model;

// Re-export main types for convenience
pub use application::{
    Exchange, ExchangeConfig, ExecutionEngine, OrderDesk, RestingOrderSweeper, SweepReport,
    SweeperHandle,
};
pub use error::{CancelError, ExecutionError, OrderAccessError, OrderError};
pub use infrastructure::{
    ChannelObserver, FillNotifier, InstrumentCatalog, ObserverId, SharedStore, Store,
};
pub use model::{FillMessage, HoldingView, OrderOutcome, PlaceOrderCommand, PortfolioView};
