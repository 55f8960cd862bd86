//! Option Chain Errors

use thiserror::Error;

/// Errors raised while reading a provider option chain.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// A quote is missing a field normalization depends on.
    #[error("Malformed quote at {expiration} / {strike}: {field}")]
    DataFormat {
        /// Expiration label of the offending bucket.
        expiration: String,
        /// Strike label of the offending quote.
        strike: String,
        /// Field that was absent or unreadable.
        field: String,
    },

    /// Every quote in the chain carries the missing-data delta sentinel.
    #[error("Bad option data for {symbol}: no quote carries a usable delta")]
    BadData {
        /// Underlying symbol that was requested.
        symbol: String,
    },

    /// One of the chain branches came back without any expirations.
    #[error("Empty {branch} branch in option chain for {symbol}")]
    EmptyChain {
        /// Underlying symbol that was requested.
        symbol: String,
        /// Branch that had no expirations.
        branch: String,
    },
}
