use serde::{Deserialize, Serialize};

/// Order lifecycle state
///
/// `Placed` is the only non-terminal state. An order leaves it exactly once,
/// either to `Executed` (one trade produced) or to `Cancelled` (no trade).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderState {
    /// Accepted and waiting to fill
    Placed,
    /// Filled in full; a trade references this order
    Executed,
    /// Cancelled by its owner before filling
    Cancelled,
}

impl OrderState {
    /// Returns true if the order is in a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderState::Executed | OrderState::Cancelled)
    }

    /// Returns true if the order can still fill or be cancelled
    pub fn is_placed(&self) -> bool {
        matches!(self, OrderState::Placed)
    }
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderState::Placed => write!(f, "PLACED"),
            OrderState::Executed => write!(f, "EXECUTED"),
            OrderState::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!OrderState::Placed.is_terminal());
        assert!(OrderState::Executed.is_terminal());
        assert!(OrderState::Cancelled.is_terminal());
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_string(&OrderState::Cancelled).unwrap();
        assert_eq!(json, "\"CANCELLED\"");
    }
}
