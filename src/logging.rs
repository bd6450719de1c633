//! Logging initialization and configuration.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when none is configured.
pub const DEFAULT_FILTER: &str = "guess_number=info,tower_http=info";

fn build_filter(filter: Option<&str>) -> EnvFilter {
    filter
        .and_then(|f| EnvFilter::try_new(f).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize the logging system.
///
/// `filter` accepts either a bare level (`debug`) or a full `EnvFilter`
/// directive list. An invalid or missing filter falls back to
/// [`DEFAULT_FILTER`].
///
/// # Panics
///
/// Panics if called more than once, or if another tracing subscriber
/// has already been set.
pub fn init(filter: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(filter))
        .with(tracing_subscriber::fmt::layer().compact())
        .init();
}

/// Try to initialize the logging system.
///
/// Returns `Err` if logging has already been initialized.
pub fn try_init(filter: Option<&str>) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(build_filter(filter))
        .with(tracing_subscriber::fmt::layer().compact())
        .try_init()
}
