//! TD Ameritrade adapter configuration.

use std::time::Duration;

use crate::config::ProviderConfig;

/// Configuration for the TD Ameritrade quote provider adapter.
#[derive(Debug, Clone)]
pub struct TdaConfig {
    /// API root, e.g. `https://api.tdameritrade.com`.
    pub base_url: String,
    /// Developer API key, sent as the `apikey` query parameter.
    pub api_key: String,
    /// HTTP request timeout.
    pub timeout: Duration,
    /// Retry policy configuration.
    pub retry: RetryConfig,
}

impl TdaConfig {
    /// Create a new configuration.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(30),
            retry: RetryConfig::default(),
        }
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry configuration.
    #[must_use]
    pub const fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Option chain endpoint.
    #[must_use]
    pub fn chains_url(&self) -> String {
        format!("{}/v1/marketdata/chains", self.base_url)
    }
}

impl From<&ProviderConfig> for TdaConfig {
    fn from(config: &ProviderConfig) -> Self {
        Self::new(config.base_url.as_str(), config.api_key.as_str())
            .with_timeout(Duration::from_secs(config.timeout_secs))
            .with_retry(RetryConfig {
                max_attempts: config.retry.max_attempts,
                initial_backoff: Duration::from_millis(config.retry.initial_backoff_ms),
                max_backoff: Duration::from_millis(config.retry.max_backoff_ms),
                multiplier: config.retry.multiplier,
            })
    }
}

/// Retry configuration.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first.
    pub max_attempts: u32,
    /// Initial backoff duration.
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
    /// Backoff multiplier.
    pub multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(10),
            multiplier: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chains_url_ignores_trailing_slash() {
        let config = TdaConfig::new("http://localhost:1234/", "key");
        assert_eq!(config.chains_url(), "http://localhost:1234/v1/marketdata/chains");
    }

    #[test]
    fn config_from_settings() {
        let mut settings = ProviderConfig::default();
        settings.api_key = "key".to_string();
        settings.timeout_secs = 5;
        settings.retry.max_attempts = 7;
        settings.retry.initial_backoff_ms = 20;

        let config = TdaConfig::from(&settings);

        assert_eq!(config.api_key, "key");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.retry.max_attempts, 7);
        assert_eq!(config.retry.initial_backoff, Duration::from_millis(20));
    }

    #[test]
    fn retry_config_default() {
        let retry = RetryConfig::default();
        assert_eq!(retry.max_attempts, 3);
        assert_eq!(retry.initial_backoff, Duration::from_millis(500));
        assert_eq!(retry.max_backoff, Duration::from_secs(10));
        assert!((retry.multiplier - 2.0).abs() < f64::EPSILON);
    }
}
