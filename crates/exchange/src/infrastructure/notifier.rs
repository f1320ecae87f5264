use dashmap::DashMap;
use log::{debug, warn};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use tokio::sync::mpsc::{self, Receiver, Sender, error::TrySendError};
use tradedesk_core::Trade;
use tradedesk_ports::{DeliveryError, FillObserver};
use uuid::Uuid;

use crate::model::FillMessage;

/// Identifier of a registered fill observer
pub type ObserverId = Uuid;

/// Registry of fill observers
///
/// The registry has its own synchronization and is never touched while the
/// store lock is held. Observers only see fills that happen after they join.
#[derive(Clone, Default)]
pub struct FillNotifier {
    observers: Arc<DashMap<ObserverId, Arc<dyn FillObserver>>>,
}

impl FillNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer under `id`
    ///
    /// Joining with an id that is already registered keeps the existing
    /// observer and returns false.
    pub fn join(&self, id: ObserverId, observer: Arc<dyn FillObserver>) -> bool {
        let mut joined = false;
        self.observers.entry(id).or_insert_with(|| {
            joined = true;
            observer
        });
        if joined {
            debug!("Observer {} joined ({} registered)", id, self.observers.len());
        }
        joined
    }

    /// Remove an observer; returns false if it was not registered
    pub fn leave(&self, id: &ObserverId) -> bool {
        let removed = self.observers.remove(id).is_some();
        if removed {
            debug!("Observer {} left", id);
        }
        removed
    }

    /// Register a channel-backed observer and return its receiving end
    ///
    /// `tokio` channels need room for at least one message, so a capacity of
    /// zero is raised to one.
    pub fn subscribe(&self, capacity: usize) -> (ObserverId, Receiver<FillMessage>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        let id = Uuid::new_v4();
        self.join(id, Arc::new(ChannelObserver::new(tx)));
        (id, rx)
    }

    /// Deliver a trade to every registered observer
    ///
    /// Each delivery is independent. An observer that fails or panics is evicted
    /// and the rest still receive the trade. Returns the number of successful
    /// deliveries.
    pub fn broadcast(&self, trade: &Trade) -> usize {
        let observers: Vec<(ObserverId, Arc<dyn FillObserver>)> = self
            .observers
            .iter()
            .map(|entry| (*entry.key(), Arc::clone(entry.value())))
            .collect();

        let mut delivered = 0;
        for (id, observer) in observers {
            let outcome = catch_unwind(AssertUnwindSafe(|| observer.deliver(trade)))
                .unwrap_or(Err(DeliveryError::Panicked));
            match outcome {
                Ok(()) => delivered += 1,
                Err(e) => {
                    warn!(
                        "Evicting observer {} after failed delivery of trade {}: {}",
                        id, trade.id, e
                    );
                    self.observers
                        .remove_if(&id, |_, current| Arc::ptr_eq(current, &observer));
                }
            }
        }
        delivered
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn contains(&self, id: &ObserverId) -> bool {
        self.observers.contains_key(id)
    }
}

/// Observer that forwards fills into a bounded channel
///
/// Delivery never waits: a full buffer or a dropped receiver is a failed
/// delivery.
pub struct ChannelObserver {
    tx: Sender<FillMessage>,
}

impl ChannelObserver {
    pub fn new(tx: Sender<FillMessage>) -> Self {
        Self { tx }
    }
}

impl FillObserver for ChannelObserver {
    fn deliver(&self, trade: &Trade) -> Result<(), DeliveryError> {
        self.tx
            .try_send(FillMessage::from(trade.clone()))
            .map_err(|e| match e {
                TrySendError::Full(_) => DeliveryError::Backpressure,
                TrySendError::Closed(_) => DeliveryError::Disconnected,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;
    use tradedesk_core::{Order, Side};

    #[derive(Default)]
    struct Recording {
        seen: Mutex<Vec<Trade>>,
    }

    impl FillObserver for Recording {
        fn deliver(&self, trade: &Trade) -> Result<(), DeliveryError> {
            self.seen.lock().unwrap().push(trade.clone());
            Ok(())
        }
    }

    struct Broken;

    impl FillObserver for Broken {
        fn deliver(&self, _trade: &Trade) -> Result<(), DeliveryError> {
            Err(DeliveryError::Rejected("socket closed".to_string()))
        }
    }

    fn trade() -> Trade {
        let order = Order::market("alice", "TCS", Side::Buy, 1, Utc::now());
        Trade::fill(&order, dec!(3800.00), Utc::now())
    }

    #[test]
    fn test_join_and_leave_are_idempotent() {
        let notifier = FillNotifier::new();
        let id = Uuid::new_v4();

        assert!(notifier.join(id, Arc::new(Recording::default())));
        assert!(!notifier.join(id, Arc::new(Recording::default())));
        assert_eq!(notifier.len(), 1);

        assert!(notifier.leave(&id));
        assert!(!notifier.leave(&id));
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_failed_observer_is_evicted_others_still_receive() {
        let notifier = FillNotifier::new();
        let good = Arc::new(Recording::default());
        let good_id = Uuid::new_v4();
        let broken_id = Uuid::new_v4();
        notifier.join(broken_id, Arc::new(Broken));
        notifier.join(good_id, good.clone());

        assert_eq!(notifier.broadcast(&trade()), 1);
        assert!(!notifier.contains(&broken_id));
        assert!(notifier.contains(&good_id));

        assert_eq!(notifier.broadcast(&trade()), 1);
        assert_eq!(good.seen.lock().unwrap().len(), 2);
    }

    struct Panicking;

    impl FillObserver for Panicking {
        fn deliver(&self, _trade: &Trade) -> Result<(), DeliveryError> {
            panic!("observer bug");
        }
    }

    #[test]
    fn test_panicking_observer_is_evicted_others_still_receive() {
        let notifier = FillNotifier::new();
        let good = Arc::new(Recording::default());
        let panicking_id = Uuid::new_v4();
        let good_id = Uuid::new_v4();
        notifier.join(panicking_id, Arc::new(Panicking));
        notifier.join(good_id, good.clone());

        assert_eq!(notifier.broadcast(&trade()), 1);
        assert!(!notifier.contains(&panicking_id));
        assert!(notifier.contains(&good_id));
        assert_eq!(good.seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_broadcast_without_observers() {
        assert_eq!(FillNotifier::new().broadcast(&trade()), 0);
    }

    #[tokio::test]
    async fn test_channel_observer_evicted_on_backpressure() {
        let notifier = FillNotifier::new();
        let (id, mut rx) = notifier.subscribe(1);

        let first = trade();
        assert_eq!(notifier.broadcast(&first), 1);
        assert_eq!(notifier.broadcast(&trade()), 0);
        assert!(!notifier.contains(&id));

        assert_eq!(rx.recv().await, Some(FillMessage::from(first)));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_channel_observer_evicted_on_disconnect() {
        let notifier = FillNotifier::new();
        let (id, rx) = notifier.subscribe(8);
        drop(rx);

        assert_eq!(notifier.broadcast(&trade()), 0);
        assert!(!notifier.contains(&id));
    }
}
