//! Logging setup utilities for the Saikoro dice-room application.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// Sets up logging for the named crate and binary. The log level can be
/// overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `crate_name` - The crate whose logs should be enabled (e.g., "saikoro_server")
/// * `binary_name` - The name of the binary (e.g., "saikoro-server")
/// * `default_log_level` - The default log level (e.g., "debug", "info")
///
/// # Examples
///
/// ```no_run
/// use saikoro_shared::logger::setup_logger;
///
/// setup_logger("saikoro_server", "saikoro-server", "debug");
/// ```
pub fn setup_logger(crate_name: &str, binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}={},{}={}",
                    crate_name.replace("-", "_"),
                    default_log_level,
                    binary_name.replace("-", "_"),
                    default_log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
