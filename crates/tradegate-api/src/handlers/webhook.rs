//! Webhook ingestion handler: decode the body, validate the signal, hand
//! it to the downstream sink.
//!
//! The transport framing check (body must be a JSON object) happens here,
//! before the validator sees anything; everything after that is the core
//! contract. Every outcome becomes a fixed-shape status response.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;
use tradegate_core::{validate, InboundPayload};
use tracing::{error, info, instrument, warn};

use crate::AppState;

/// Response body shape shared by every webhook outcome.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Overall outcome marker.
    pub status: ResponseStatus,
    /// Human-readable outcome description.
    pub message: String,
}

/// Outcome marker rendered as `"success"` or `"error"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    /// The signal was accepted and handed off.
    Success,
    /// The request was rejected or processing failed.
    Error,
}

/// Handles `POST /webhook`.
///
/// Decodes the body as a JSON object, runs the validation contract, and on
/// success passes the signal to the injected sink. Responds 400 for framing
/// and validation failures, 500 for sink faults, 200 otherwise. The
/// validated payload is not echoed back.
#[instrument(name = "receive_signal", skip(state, body), fields(body_len = body.len()))]
pub async fn receive_signal(State(state): State<AppState>, body: Bytes) -> Response {
    let Some(payload) = decode_payload(&body) else {
        warn!("Request body is not a JSON object");
        return error_response(StatusCode::BAD_REQUEST, "No JSON data received".to_string());
    };

    let signal = match validate(&payload) {
        Ok(signal) => signal,
        Err(e) => {
            warn!(reason = e.kind(), error = %e, "Signal validation failed");
            return error_response(StatusCode::BAD_REQUEST, e.to_string());
        },
    };

    info!(
        action = %signal.action,
        symbol = %signal.symbol,
        price = signal.price,
        lot_size = signal.lot_size,
        "Signal validated"
    );

    match state.sink.accept(signal).await {
        Ok(()) => (
            StatusCode::OK,
            Json(StatusResponse {
                status: ResponseStatus::Success,
                message: "Signal received and validated".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Signal hand-off failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        },
    }
}

/// Decodes the raw body into a payload map.
///
/// Returns `None` for absent, undecodable, or non-object bodies; those are
/// transport failures and never reach the validator.
fn decode_payload(body: &Bytes) -> Option<InboundPayload> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Builds the fixed-shape error response.
fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(StatusResponse { status: ResponseStatus::Error, message })).into_response()
}
