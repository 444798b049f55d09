//! Domain models for trading-signal ingestion.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Decoded request body: an unordered mapping from field names to JSON
/// values. Read-only input to validation.
pub type InboundPayload = serde_json::Map<String, serde_json::Value>;

/// Direction of a trading signal.
///
/// Wire form is lowercase (`"buy"` / `"sell"`); matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Open or extend a long position.
    Buy,
    /// Open or extend a short position, or close a long.
    Sell,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// A fully validated trading signal.
///
/// Constructed only by [`crate::validate::validate`] once every check has
/// passed; never partially built. Immutable after construction, ownership
/// passes to whatever [`crate::sink::SignalSink`] consumes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradingSignal {
    /// Normalized trade direction.
    pub action: Action,
    /// Instrument identifier as supplied by the caller, never empty.
    pub symbol: String,
    /// Signal price, strictly positive and finite.
    pub price: f64,
    /// Order size in lots, strictly positive and finite.
    pub lot_size: f64,
}
