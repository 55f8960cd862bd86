//! Configuration module for the order generator.
//!
//! Loads a YAML file with `${VAR}` / `${VAR:-default}` environment
//! interpolation, falling back to built-in defaults when no file exists.
//!
//! # Usage
//!
//! ```rust,ignore
//! use order_generator::config::load_config;
//!
//! // Load from default path (order-generator.yaml), or defaults
//! let config = load_config(None)?;
//!
//! println!("Output: {}", config.output.file_path().display());
//! ```

mod observability;
mod order;
mod provider;
mod validation;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use observability::{LoggingConfig, ObservabilityConfig};
pub use order::{CatalogConfig, OrderConfig, OutputConfig};
pub use provider::{ProviderConfig, RetrySettings};
pub use validation::{require_api_key, validate_config};

/// Config file looked up when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "order-generator.yaml";

/// Configuration used when no file exists; still interpolated.
const DEFAULT_CONFIG_YAML: &str = r#"
provider:
  api_key: "${TOS_API_KEY:-}"
output:
  directory: "${TOS_GEN_ORDER_FILE_PATH:-}"
"#;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),

    /// Missing required environment variable.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Option chain provider.
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Order labeling.
    #[serde(default)]
    pub order: OrderConfig,
    /// Trade structure catalog.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Order output.
    #[serde(default)]
    pub output: OutputConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// With `None`, [`DEFAULT_CONFIG_PATH`] is used if it exists and built-in
/// defaults otherwise. An explicit path must exist.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match path {
        Some(path) => path,
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if !default.exists() {
                tracing::debug!(path = DEFAULT_CONFIG_PATH, "No config file, using defaults");
                return load_config_from_string(DEFAULT_CONFIG_YAML);
            }
            default
        }
    };

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), "Loaded config file");
    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |caps: &regex::Captures<'_>| {
        let default_value = caps.get(2).map_or("", |m| m.as_str());
        match caps.get(1).map(|m| std::env::var(m.as_str())) {
            Some(Ok(v)) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}
