//! Downstream hand-off for validated signals.
//!
//! The HTTP handler owns transport concerns only; whatever happens to an
//! accepted signal (execution, persistence, forwarding) lives behind the
//! [`SignalSink`] trait and is injected at startup. Keeps the validated
//! core decoupled from the eventual processing step.

use crate::{error::SinkError, models::TradingSignal};

/// Consumer of validated trading signals.
///
/// Implementations take ownership of each accepted signal. A returned
/// error is surfaced to the webhook caller as an internal fault, so sinks
/// should only fail when the signal genuinely could not be handed off.
#[async_trait::async_trait]
pub trait SignalSink: Send + Sync + std::fmt::Debug {
    /// Accepts one validated signal.
    async fn accept(&self, signal: TradingSignal) -> Result<(), SinkError>;
}

/// Sink that discards all signals.
///
/// Used in tests and when processing is disabled.
#[derive(Debug, Default)]
pub struct NoOpSink;

impl NoOpSink {
    /// Creates a new no-op sink.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl SignalSink for NoOpSink {
    async fn accept(&self, _signal: TradingSignal) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Sink that records each accepted signal to the log and discards it.
///
/// The production default until a real processing step is plugged in.
#[derive(Debug, Default)]
pub struct LogSink;

impl LogSink {
    /// Creates a new logging sink.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl SignalSink for LogSink {
    async fn accept(&self, signal: TradingSignal) -> Result<(), SinkError> {
        tracing::info!(
            action = %signal.action,
            symbol = %signal.symbol,
            price = signal.price,
            lot_size = signal.lot_size,
            "Processing signal"
        );
        Ok(())
    }
}
