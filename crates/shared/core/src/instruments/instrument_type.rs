use serde::{Deserialize, Serialize};

/// Kind of listed instrument, using the exchange's segment codes on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstrumentType {
    /// Cash equity
    #[serde(rename = "EQ")]
    Equity,
    /// Exchange traded fund
    #[serde(rename = "ETF")]
    Etf,
    /// Index or stock future
    #[serde(rename = "FUT")]
    Future,
}

impl std::fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstrumentType::Equity => write!(f, "EQ"),
            InstrumentType::Etf => write!(f, "ETF"),
            InstrumentType::Future => write!(f, "FUT"),
        }
    }
}
