//! Application Ports (Driven)
//!
//! Ports define interfaces for the external systems the generator uses:
//! the option chain provider, the trade catalog, and the order output.

mod order_sink_port;
mod quote_provider_port;
mod trade_catalog_port;

pub use order_sink_port::{OrderSinkPort, SinkError, WriteMode};
pub use quote_provider_port::{ProviderError, QuoteProviderPort};
pub use trade_catalog_port::{CatalogError, TradeCatalogPort};
