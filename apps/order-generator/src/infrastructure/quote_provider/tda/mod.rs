//! TD Ameritrade Quote Provider Adapter
//!
//! Implementation of `QuoteProviderPort` for the `/v1/marketdata/chains`
//! endpoint with:
//! - API key authentication via query parameter
//! - Retry logic with exponential backoff

mod adapter;
mod config;
mod error;
mod http_client;

pub use adapter::TdaQuoteProvider;
pub use config::{RetryConfig, TdaConfig};
pub use error::TdaError;
