//! Quote provider configuration.

use serde::{Deserialize, Serialize};

/// Option chain provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API root, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Developer API key.
    #[serde(default)]
    pub api_key: String,
    /// Underlying symbol as the provider names it.
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Chain fetches per trade before bad or empty data is reported.
    #[serde(default = "default_max_fetch_attempts")]
    pub max_fetch_attempts: u32,
    /// Transport-level retry policy.
    #[serde(default)]
    pub retry: RetrySettings,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            symbol: default_symbol(),
            timeout_secs: default_timeout_secs(),
            max_fetch_attempts: default_max_fetch_attempts(),
            retry: RetrySettings::default(),
        }
    }
}

/// HTTP retry settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrySettings {
    /// Attempts per request, including the first.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// First backoff delay in milliseconds.
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,
    /// Backoff ceiling in milliseconds.
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,
    /// Growth factor between delays.
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            initial_backoff_ms: default_initial_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
            multiplier: default_multiplier(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.tdameritrade.com".to_string()
}

fn default_symbol() -> String {
    "$SPX.X".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_max_fetch_attempts() -> u32 {
    5
}

const fn default_max_attempts() -> u32 {
    3
}

const fn default_initial_backoff_ms() -> u64 {
    500
}

const fn default_max_backoff_ms() -> u64 {
    10_000
}

const fn default_multiplier() -> f64 {
    2.0
}
