//! Tradegate HTTP API.
//!
//! Axum transport for the signal receiver: routing, request handling,
//! configuration, and the server loop. Validation itself lives in
//! `tradegate-core`; this crate only frames requests and responses.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::sync::Arc;

use tradegate_core::SignalSink;

pub mod config;
pub mod handlers;
pub mod server;

pub use config::Config;
pub use server::{create_router, start_server};

/// Shared state handed to every request handler.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Consumer of validated signals, injected at startup.
    pub sink: Arc<dyn SignalSink>,
}

impl AppState {
    /// Creates state around the given sink.
    pub fn new(sink: Arc<dyn SignalSink>) -> Self {
        Self { sink }
    }
}
