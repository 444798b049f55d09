//! Tradegate trading-signal webhook receiver.
//!
//! Main entry point. Loads configuration, wires the logging subscriber and
//! the downstream signal sink, and runs the HTTP server until shutdown.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tradegate_api::{start_server, Config};
use tradegate_core::{LogSink, SignalSink};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from defaults, config.toml, and environment
    let config = Config::load()?;

    // Initialize tracing with structured logging
    init_tracing(&config.rust_log);

    info!("Starting Tradegate signal receiver");
    info!(
        host = %config.host,
        port = config.port,
        request_timeout = config.request_timeout,
        "Configuration loaded"
    );

    let addr = config.parse_server_addr()?;

    // The processing step behind the webhook. LogSink records accepted
    // signals until a real executor or forwarder is plugged in.
    let sink: Arc<dyn SignalSink> = Arc::new(LogSink::new());

    info!(addr = %addr, "Tradegate is ready to receive signals");

    start_server(sink, addr, config.request_timeout_duration())
        .await
        .context("HTTP server failed")?;

    info!("Tradegate shutdown complete");
    Ok(())
}

/// Initializes tracing with environment-based configuration.
///
/// `RUST_LOG` from the environment wins; the configured level is the
/// fallback.
fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
