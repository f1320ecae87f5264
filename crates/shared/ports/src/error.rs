use thiserror::Error;

/// Failure to hand a fill to one observer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("Observer disconnected")]
    Disconnected,

    #[error("Observer buffer is full")]
    Backpressure,

    #[error("Observer rejected delivery: {0}")]
    Rejected(String),

    #[error("Observer panicked during delivery")]
    Panicked,
}
