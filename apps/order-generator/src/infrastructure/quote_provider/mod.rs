//! Quote Provider Adapters
//!
//! Implementations of `QuoteProviderPort`:
//! - `tda`: TD Ameritrade market data API
//! - `fixture`: a chain loaded from a JSON file, for offline runs and tests

pub mod fixture;
pub mod tda;

pub use fixture::FixtureQuoteProvider;
pub use tda::{TdaConfig, TdaError, TdaQuoteProvider};
