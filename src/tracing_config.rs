//! Subscriber setup for the server binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::AuthError;
use crate::config::LogConfig;

/// Installs the global subscriber. `log` records from this crate and its
/// dependencies are forwarded through the `tracing-log` bridge.
///
/// # Errors
///
/// Returns `AuthError::ConfigurationError` if the filter does not parse or
/// a global subscriber is already set.
pub fn init(config: &LogConfig) -> Result<(), AuthError> {
    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| AuthError::ConfigurationError(format!("invalid log filter: {e}")))?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };

    result.map_err(|e| AuthError::ConfigurationError(format!("subscriber already set: {e}")))
}
