//! Tracing Setup
//!
//! Initializes a `tracing-subscriber` console logger on stderr, leaving
//! stdout to the interactive session.
//!
//! # Configuration
//!
//! - `RUST_LOG`: filter directives, taking precedence over the config file
//! - `observability.logging.level`: default filter (default: `warn`)
//! - `observability.logging.format`: `full`, `compact`, or `pretty`
//!
//! # Usage
//!
//! ```rust,ignore
//! use order_generator::telemetry::init_telemetry;
//!
//! init_telemetry(&config.observability.logging);
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Build the filter: `RUST_LOG` if set and valid, otherwise `config.level`.
fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize console tracing.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_telemetry(config: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_target(true);

    let result = match config.format.as_str() {
        "full" => builder.try_init(),
        "pretty" => builder.pretty().try_init(),
        _ => builder.compact().try_init(),
    };

    if result.is_ok() {
        tracing::debug!(
            level = %config.level,
            format = %config.format,
            "Telemetry initialized"
        );
    }
}
