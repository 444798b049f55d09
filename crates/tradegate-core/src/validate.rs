//! Signal validation: the contract deciding whether an inbound payload is
//! an acceptable trading signal.
//!
//! Checks run in a fixed order and the first failing check wins, so a
//! payload is never reported against more than one rule at a time. The
//! validator is a pure function: no I/O, no logging, no shared state, safe
//! to call from any number of concurrent request handlers.

use serde_json::Value;

use crate::{
    error::ValidationError,
    models::{Action, InboundPayload, TradingSignal},
};

/// Outcome of validating one inbound payload.
pub type ValidationOutcome = Result<TradingSignal, ValidationError>;

/// Required payload fields, in the order they are reported when missing.
const REQUIRED_FIELDS: [&str; 4] = ["action", "symbol", "price", "lot_size"];

/// Validates a decoded webhook payload into a [`TradingSignal`].
///
/// Checks, in order:
/// 1. every required field is supplied (present, non-null, non-empty),
/// 2. `action` is exactly `"buy"` or `"sell"`,
/// 3. `price` and `lot_size` are finite numbers or numeric strings,
/// 4. both parsed values are strictly positive.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first check that fails; its
/// `Display` output is the exact reason string owed to the caller.
pub fn validate(payload: &InboundPayload) -> ValidationOutcome {
    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !is_supplied(field, payload.get(*field)))
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let action = match payload.get("action").and_then(Value::as_str) {
        Some("buy") => Action::Buy,
        Some("sell") => Action::Sell,
        _ => return Err(ValidationError::InvalidAction),
    };

    // Supplied and a string, per the presence check above.
    let symbol = payload
        .get("symbol")
        .and_then(Value::as_str)
        .ok_or(ValidationError::MissingFields(vec!["symbol"]))?
        .to_string();

    let (Some(price), Some(lot_size)) = (
        payload.get("price").and_then(parse_finite),
        payload.get("lot_size").and_then(parse_finite),
    ) else {
        return Err(ValidationError::NotNumeric);
    };

    if price <= 0.0 || lot_size <= 0.0 {
        return Err(ValidationError::NotPositive);
    }

    Ok(TradingSignal { action, symbol, price, lot_size })
}

/// Whether a field carries a usable value: present, non-null, and non-empty
/// when it is a string. Explicit checks rather than truthiness, so the
/// number `0` and the boolean `false` count as supplied and fall through to
/// the later checks. `symbol` must itself be a string since it is carried
/// through verbatim rather than coerced.
fn is_supplied(field: &str, value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => field != "symbol",
    }
}

/// Reads a JSON value as a finite `f64`, accepting numbers and numeric
/// strings. Surrounding whitespace in strings is tolerated; `"inf"` and
/// `"NaN"` parse but are rejected as non-finite.
fn parse_finite(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}
