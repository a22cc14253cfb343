//! Logging and tracing setup for the factory API.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter: handler events and one line per HTTP request.
const DEFAULT_FILTER: &str = "factory_api=info,tower_http=info";

/// Initialize the tracing subscriber with JSON formatting.
///
/// Reads log level from RUST_LOG environment variable, falling back to
/// [`DEFAULT_FILTER`]. Event fields are flattened into the top-level object
/// and each line carries the enclosing request span (method, uri) from the
/// HTTP trace layer, so a create event can be matched to its request.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .with_span_list(false)
                .with_target(true),
        )
        .init();
}

/// Initialize tracing for tests (human-readable format, no JSON).
///
/// Only this crate logs at debug; request spans from `tower_http` stay quiet.
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("factory_api=debug,tower_http=warn")
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn test_init_test_is_repeatable() {
        init_test();
        init_test();
        tracing::debug!(resource = "product", "logging initialised twice");
    }
}
