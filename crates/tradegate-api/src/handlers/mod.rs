//! HTTP request handlers for the Tradegate API.
//!
//! Handlers follow a consistent pattern: frame the request, delegate to the
//! core validation contract, translate every outcome into a response, and
//! trace the result. No handler lets a fault escape the request boundary.

pub mod health;
pub mod webhook;

pub use health::{health_check, liveness_check, readiness_check};
pub use webhook::receive_signal;
