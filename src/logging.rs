//! Tracing setup for applications and extension modules embedding the crate.
//!
//! The library itself only emits `debug`/`trace` events describing the work
//! it performs. Installing a subscriber is left to the host; these helpers
//! install a reasonable one, honouring `RUST_LOG`.

use std::sync::Once;

use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

static INIT: Once = Once::new();

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global tracing subscriber with human-readable output.
///
/// Only the first call (of this or [`init_tracing_json`]) has an effect.
/// If another subscriber is already installed, this is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_thread_names(true);

        if tracing_subscriber::registry()
            .with(env_filter())
            .with(fmt_layer)
            .try_init()
            .is_ok()
        {
            info!("windowed-entropy tracing initialized");
        }
    });
}

/// Initialize tracing with JSON output for structured logging.
pub fn init_tracing_json() {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_thread_names(true)
            .with_current_span(true);

        if tracing_subscriber::registry()
            .with(env_filter())
            .with(fmt_layer)
            .try_init()
            .is_ok()
        {
            info!("windowed-entropy tracing initialized (JSON mode)");
        }
    });
}
