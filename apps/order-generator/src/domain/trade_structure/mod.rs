//! Trade Structure Bounded Context
//!
//! Named multi-leg trade structures loaded from the trade catalog:
//! - Leg definitions (option type, DTE and delta targets, signed quantity)
//! - Trade components (one order line each)
//! - Catalog lookup and menu listing

pub mod aggregate;
pub mod errors;
pub mod value_objects;

pub use aggregate::TradeCatalog;
pub use errors::TradeStructureError;
pub use value_objects::{LegDefinition, TradeComponent, TradeStructure};
