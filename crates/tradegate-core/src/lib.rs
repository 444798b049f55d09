//! Core domain types and validation for trading-signal webhooks.
//!
//! Provides the signal model, the pure validation contract applied to every
//! inbound payload, and the sink trait that downstream processors implement.
//! The HTTP transport crate depends on these types; nothing here performs
//! I/O except the stock sink implementations.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod models;
pub mod sink;
pub mod validate;

pub use error::{SinkError, ValidationError};
pub use models::{Action, InboundPayload, TradingSignal};
pub use sink::{LogSink, NoOpSink, SignalSink};
pub use validate::{validate, ValidationOutcome};
