//! # Telemetry
//!
//! Global `tracing` subscriber setup.

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Builds the filter. `RUST_LOG` wins over the configured directive.
#[must_use]
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(from_env.as_deref(), &config.filter)
}

/// First parseable of the environment directive, the configured one, `info`.
fn filter_from(from_env: Option<&str>, configured: &str) -> EnvFilter {
    from_env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(configured).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns [`TryInitError`] if a global subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(env_filter(config));
    if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_directive_applies_without_env() {
        assert_eq!(filter_from(None, "debug").to_string(), "debug");
    }

    #[test]
    fn env_directive_wins() {
        assert_eq!(filter_from(Some("warn"), "debug").to_string(), "warn");
    }

    #[test]
    fn unparseable_directives_fall_back() {
        assert_eq!(
            filter_from(Some("quote_relay=loud"), "debug").to_string(),
            "debug"
        );
        assert_eq!(filter_from(None, "quote_relay=loud").to_string(), "info");
    }
}
