//! Trade Structure Value Objects

mod leg_definition;
mod trade_component;
mod trade_structure;

pub use leg_definition::LegDefinition;
pub use trade_component::TradeComponent;
pub use trade_structure::TradeStructure;
