//! Health check handlers for service monitoring.
//!
//! The receiver holds no external dependencies, so all three probes report
//! from process state alone. Designed to be called frequently by
//! orchestration systems and load balancers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use tracing::{debug, instrument};

/// Primary health check endpoint.
#[instrument(name = "health_check")]
pub async fn health_check() -> Response {
    debug!("Performing health check");

    let response = serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "version": env!("CARGO_PKG_VERSION"),
    });

    (StatusCode::OK, Json(response)).into_response()
}

/// Readiness check endpoint for orchestration probes.
///
/// The service is ready as soon as the router is serving; there is no
/// warm-up state to wait out.
#[instrument(name = "readiness_check")]
pub async fn readiness_check() -> Response {
    health_check().await
}

/// Liveness check endpoint for orchestration probes.
///
/// Minimal check that only confirms the HTTP server is responding.
#[instrument(name = "liveness_check")]
pub async fn liveness_check() -> Response {
    debug!("Performing liveness check");

    let response = serde_json::json!({
        "status": "alive",
        "timestamp": Utc::now(),
        "service": "tradegate-api",
    });

    (StatusCode::OK, Json(response)).into_response()
}
