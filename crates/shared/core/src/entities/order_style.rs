use serde::{Deserialize, Serialize};

/// How an order is priced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStyle {
    /// Execute at the instrument's reference price
    Market,
    /// Execute at the limit price once the reference price allows it
    Limit,
}

impl std::fmt::Display for OrderStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStyle::Market => write!(f, "MARKET"),
            OrderStyle::Limit => write!(f, "LIMIT"),
        }
    }
}
