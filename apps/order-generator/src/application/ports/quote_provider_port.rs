//! Quote Provider Port (Driven Port)
//!
//! Interface for fetching a full option chain for one underlying.

use async_trait::async_trait;

use crate::domain::option_chain::OptionChainRaw;
use crate::domain::shared::Symbol;

/// Quote provider port error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// No API key configured.
    #[error("Quote provider API key is not configured")]
    MissingApiKey,

    /// Connection or transport failure.
    #[error("Quote provider connection error: {message}")]
    Connection {
        /// Error details.
        message: String,
    },

    /// Provider answered with a non-success status.
    #[error("Quote provider returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body or reason.
        message: String,
    },

    /// Response body was not an option chain.
    #[error("Failed to decode option chain: {message}")]
    Decode {
        /// Decoder message.
        message: String,
    },

    /// Rate limited.
    #[error("Rate limited by quote provider")]
    RateLimited,
}

impl ProviderError {
    /// Check if trying again later may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Connection { .. } | Self::RateLimited => true,
            Self::Status { status, .. } => matches!(*status, 408 | 429 | 500..=599),
            Self::MissingApiKey | Self::Decode { .. } => false,
        }
    }
}

/// Port for option chain retrieval.
#[async_trait]
pub trait QuoteProviderPort: Send + Sync {
    /// Fetch every expiration and strike of both branches for `symbol`.
    async fn option_chain(&self, symbol: &Symbol) -> Result<OptionChainRaw, ProviderError>;
}
