mod catalog;
mod notifier;
mod store;

pub use catalog::InstrumentCatalog;
pub use notifier::{ChannelObserver, FillNotifier, ObserverId};
pub use store::{SharedStore, Store};
