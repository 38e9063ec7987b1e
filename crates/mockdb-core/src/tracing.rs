use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const FALLBACK_DIRECTIVE: &str = "info";

/// `RUST_LOG` when it parses, otherwise everything at `info` and above.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FALLBACK_DIRECTIVE))
}

/// Installs the global subscriber: one JSON object per event on stdout, with
/// the event's target and the fields of the request span it happened in.
///
/// Only the first call installs anything. Later calls, including those from
/// tests sharing a process, leave the existing subscriber in place.
pub fn init_tracing() {
    let json = fmt::layer()
        .json()
        .with_target(true)
        .with_current_span(true)
        .with_span_list(false);
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(json)
        .try_init();
}
