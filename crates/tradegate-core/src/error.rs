//! Error types for signal validation and downstream processing.
//!
//! Validation failures carry the exact reason strings surfaced to webhook
//! callers; sink failures wrap whatever the downstream processor reports.

use thiserror::Error;

/// Why an inbound payload was rejected.
///
/// The `Display` output is the contract string returned to the caller in
/// the HTTP error response, so the wording here is load-bearing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields are absent, null, or empty.
    #[error("Missing or invalid fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// `action` is present but not one of the accepted values.
    #[error("Invalid 'action' value. Must be 'buy' or 'sell'.")]
    InvalidAction,

    /// `price` or `lot_size` cannot be read as a finite number.
    #[error("'price' and 'lot_size' must be valid numbers.")]
    NotNumeric,

    /// `price` or `lot_size` parsed but is zero or negative.
    #[error("'price' and 'lot_size' must be positive valid numbers.")]
    NotPositive,
}

impl ValidationError {
    /// Stable label for structured log fields.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingFields(_) => "missing_fields",
            Self::InvalidAction => "invalid_action",
            Self::NotNumeric => "not_numeric",
            Self::NotPositive => "not_positive",
        }
    }
}

/// Failure reported by a downstream signal processor.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The processor looked at the signal and refused it.
    #[error("downstream processor rejected signal: {0}")]
    Rejected(String),

    /// Anything else that went wrong while handing the signal off.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
