//! Configuration validation.

use super::{Config, ConfigError};
use crate::domain::shared::Symbol;

const LOG_FORMATS: [&str; 3] = ["full", "compact", "pretty"];

/// Validate configuration values.
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` naming the first offending field.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let provider = &config.provider;

    if !(provider.base_url.starts_with("http://") || provider.base_url.starts_with("https://")) {
        return Err(ConfigError::ValidationError(format!(
            "provider.base_url must be an http(s) URL, got '{}'",
            provider.base_url
        )));
    }

    Symbol::new(provider.symbol.as_str())
        .validate()
        .map_err(|e| ConfigError::ValidationError(format!("provider.symbol: {e}")))?;

    if provider.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "provider.timeout_secs must be positive".to_string(),
        ));
    }

    if provider.max_fetch_attempts == 0 {
        return Err(ConfigError::ValidationError(
            "provider.max_fetch_attempts must be at least 1".to_string(),
        ));
    }

    let retry = &provider.retry;
    if retry.max_attempts == 0 {
        return Err(ConfigError::ValidationError(
            "provider.retry.max_attempts must be at least 1".to_string(),
        ));
    }

    if !retry.multiplier.is_finite() || retry.multiplier < 1.0 {
        return Err(ConfigError::ValidationError(
            "provider.retry.multiplier must be >= 1.0".to_string(),
        ));
    }

    if retry.initial_backoff_ms > retry.max_backoff_ms {
        return Err(ConfigError::ValidationError(
            "provider.retry.initial_backoff_ms must not exceed max_backoff_ms".to_string(),
        ));
    }

    if config.order.symbol.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "order.symbol must not be empty".to_string(),
        ));
    }

    if config.order.multiplier == 0 {
        return Err(ConfigError::ValidationError(
            "order.multiplier must be positive".to_string(),
        ));
    }

    if config.output.file_name.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "output.file_name must not be empty".to_string(),
        ));
    }

    let format = config.observability.logging.format.as_str();
    if !LOG_FORMATS.contains(&format) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {LOG_FORMATS:?}"
        )));
    }

    Ok(())
}

/// Check that the provider API key is present.
///
/// Kept apart from [`validate_config`] so a configuration can be loaded and
/// inspected without credentials.
///
/// # Errors
///
/// Returns `ConfigError::MissingEnvVar` when the key is empty.
pub fn require_api_key(config: &Config) -> Result<(), ConfigError> {
    if config.provider.api_key.trim().is_empty() {
        return Err(ConfigError::MissingEnvVar("TOS_API_KEY".to_string()));
    }
    Ok(())
}
