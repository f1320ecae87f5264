mod holding;
mod order;
mod order_state;
mod order_style;
mod side;
mod trade;

pub use holding::Holding;
pub use order::{Order, OrderId};
pub use order_state::OrderState;
pub use order_style::OrderStyle;
pub use side::Side;
pub use trade::{Trade, TradeId};
