//! Trade Structure Aggregates

mod catalog;

pub use catalog::TradeCatalog;
