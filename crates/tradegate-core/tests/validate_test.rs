//! Behavioral tests for the signal validation contract.
//!
//! Exercises each rejection rule, the fixed check ordering, and the exact
//! reason strings surfaced to webhook callers.

use serde_json::{json, Value};
use tradegate_core::{validate, Action, InboundPayload, ValidationError};

fn payload(value: Value) -> InboundPayload {
    match value {
        Value::Object(map) => map,
        other => panic!("test payload must be an object, got {other}"),
    }
}

#[test]
fn well_formed_payload_produces_normalized_signal() {
    let signal = validate(&payload(json!({
        "action": "buy",
        "symbol": "EURUSD",
        "price": "1.2345",
        "lot_size": "0.1",
    })))
    .expect("well-formed payload should validate");

    assert_eq!(signal.action, Action::Buy);
    assert_eq!(signal.symbol, "EURUSD");
    assert_eq!(signal.price, 1.2345);
    assert_eq!(signal.lot_size, 0.1);
}

#[test]
fn empty_payload_lists_all_fields_in_canonical_order() {
    let err = validate(&payload(json!({}))).unwrap_err();

    assert_eq!(err.to_string(), "Missing or invalid fields: action, symbol, price, lot_size");
}

#[test]
fn missing_fields_are_listed_in_canonical_order_not_payload_order() {
    // Only some fields missing; the report keeps the fixed order.
    let err = validate(&payload(json!({
        "symbol": "EURUSD",
        "price": 1.2,
    })))
    .unwrap_err();

    assert_eq!(err, ValidationError::MissingFields(vec!["action", "lot_size"]));
    assert_eq!(err.to_string(), "Missing or invalid fields: action, lot_size");
}

#[test]
fn null_values_count_as_missing() {
    let err = validate(&payload(json!({
        "action": null,
        "symbol": "EURUSD",
        "price": 1.2,
        "lot_size": 0.1,
    })))
    .unwrap_err();

    assert_eq!(err, ValidationError::MissingFields(vec!["action"]));
}

#[test]
fn empty_strings_count_as_missing() {
    let err = validate(&payload(json!({
        "action": "buy",
        "symbol": "",
        "price": 1.2,
        "lot_size": 0.1,
    })))
    .unwrap_err();

    assert_eq!(err, ValidationError::MissingFields(vec!["symbol"]));
}

#[test]
fn non_string_symbol_is_reported_as_invalid_field() {
    let err = validate(&payload(json!({
        "action": "buy",
        "symbol": 123,
        "price": 1.2,
        "lot_size": 0.1,
    })))
    .unwrap_err();

    assert_eq!(err, ValidationError::MissingFields(vec!["symbol"]));
}

#[test]
fn unknown_action_is_rejected() {
    let err = validate(&payload(json!({
        "action": "hold",
        "symbol": "EURUSD",
        "price": 1.2,
        "lot_size": 0.1,
    })))
    .unwrap_err();

    assert_eq!(err, ValidationError::InvalidAction);
    assert_eq!(err.to_string(), "Invalid 'action' value. Must be 'buy' or 'sell'.");
}

#[test]
fn action_matching_is_case_sensitive() {
    for bad in ["BUY", "Sell", "bUy"] {
        let err = validate(&payload(json!({
            "action": bad,
            "symbol": "EURUSD",
            "price": 1.2,
            "lot_size": 0.1,
        })))
        .unwrap_err();

        assert_eq!(err, ValidationError::InvalidAction, "action {bad:?}");
    }
}

#[test]
fn non_string_action_is_rejected_by_the_action_check() {
    // Present and non-null, so it passes presence and fails the enum check.
    let err = validate(&payload(json!({
        "action": 7,
        "symbol": "EURUSD",
        "price": 1.2,
        "lot_size": 0.1,
    })))
    .unwrap_err();

    assert_eq!(err, ValidationError::InvalidAction);
}

#[test]
fn non_numeric_price_is_rejected() {
    let err = validate(&payload(json!({
        "action": "buy",
        "symbol": "EURUSD",
        "price": "abc",
        "lot_size": 0.1,
    })))
    .unwrap_err();

    assert_eq!(err, ValidationError::NotNumeric);
    assert_eq!(err.to_string(), "'price' and 'lot_size' must be valid numbers.");
}

#[test]
fn structured_values_are_not_numbers() {
    for bad in [json!([1.2]), json!({"value": 1.2}), json!(true)] {
        let err = validate(&payload(json!({
            "action": "buy",
            "symbol": "EURUSD",
            "price": 1.2,
            "lot_size": bad,
        })))
        .unwrap_err();

        assert_eq!(err, ValidationError::NotNumeric);
    }
}

#[test]
fn negative_price_is_rejected() {
    let err = validate(&payload(json!({
        "action": "sell",
        "symbol": "EURUSD",
        "price": -5,
        "lot_size": 0.1,
    })))
    .unwrap_err();

    assert_eq!(err, ValidationError::NotPositive);
    assert_eq!(err.to_string(), "'price' and 'lot_size' must be positive valid numbers.");
}

#[test]
fn zero_lot_size_is_rejected() {
    let err = validate(&payload(json!({
        "action": "sell",
        "symbol": "EURUSD",
        "price": 1.2,
        "lot_size": 0,
    })))
    .unwrap_err();

    assert_eq!(err, ValidationError::NotPositive);
}

#[test]
fn first_failing_check_wins() {
    // Bad action and bad price together: only the action error is reported.
    let err = validate(&payload(json!({
        "action": "hold",
        "symbol": "EURUSD",
        "price": "abc",
        "lot_size": -1,
    })))
    .unwrap_err();

    assert_eq!(err, ValidationError::InvalidAction);
}

#[test]
fn missing_fields_are_reported_before_action_problems() {
    let err = validate(&payload(json!({
        "action": "hold",
        "price": 1.2,
        "lot_size": 0.1,
    })))
    .unwrap_err();

    assert_eq!(err, ValidationError::MissingFields(vec!["symbol"]));
}

#[test]
fn validation_is_idempotent() {
    let body = payload(json!({
        "action": "sell",
        "symbol": "XAUUSD",
        "price": 2411.07,
        "lot_size": "0.25",
    }));

    let first = validate(&body).expect("payload should validate");
    let second = validate(&body).expect("payload should validate again");

    assert_eq!(first, second);
}
