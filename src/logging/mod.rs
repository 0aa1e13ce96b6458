//! Logging setup.
//!
//! Production gets JSON lines on stdout; every other environment gets
//! colored, human-readable output. `RUST_LOG` overrides the `info` default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber for `environment`.
///
/// Returns false when a subscriber was already installed.
pub fn init_logging(environment: &str) -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);
    let installed = if is_production(environment) {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(false)
                    .with_writer(std::io::stdout),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .try_init()
    };

    installed.is_ok()
}

pub fn is_production(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}
