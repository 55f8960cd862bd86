//! Persistence Adapters
//!
//! File implementations of the catalog and sink ports, plus in-memory
//! versions for tests.

pub mod file_order_sink;
pub mod in_memory;
pub mod json_trade_catalog;

pub use file_order_sink::FileOrderSink;
pub use in_memory::{InMemoryOrderSink, InMemoryTradeCatalog};
pub use json_trade_catalog::{JsonTradeCatalog, parse_catalog};
