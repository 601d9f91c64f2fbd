//! # Logging
//!
//! Events and spans are printed to the console through
//! `tracing_subscriber::fmt`. Verbosity follows `RUST_LOG` and defaults to
//! `info`.
//!
//! ## Span behavior
//!
//! - Every HTTP request gets a span from `tower_http::trace::TraceLayer`.
//! - Handlers add their own `info`/`warn` events inside that span, so a
//!   rejected login shows up nested under its request.
//!
//! ## Example usage
//!
//! ```bash
//! RUST_LOG=kata_server=debug,kata=trace,tower_http=debug cargo run -p kata-server
//! ```

use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_thread_ids(true)
                .with_line_number(true)
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_file(true)
                .pretty(),
        )
        .try_init()
        .context("failed to install tracing subscriber")
}
