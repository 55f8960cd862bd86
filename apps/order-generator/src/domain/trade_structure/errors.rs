//! Trade Structure Errors

use thiserror::Error;

/// Errors from trade structure definitions and lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TradeStructureError {
    /// A trade component is internally inconsistent.
    #[error("Invalid component {component} of trade '{trade_name}': {message}")]
    InvalidComponent {
        /// Trade the component belongs to.
        trade_name: String,
        /// Position of the component within the trade.
        component: usize,
        /// What is wrong with it.
        message: String,
    },

    /// A trade has no components.
    #[error("Trade '{trade_name}' has no components")]
    EmptyTrade {
        /// Trade name.
        trade_name: String,
    },

    /// Two trades share a name.
    #[error("Duplicate trade name: {trade_name}")]
    DuplicateName {
        /// Trade name.
        trade_name: String,
    },

    /// No trade with the requested name.
    #[error("Trade not found: {name}")]
    NotFound {
        /// Name that was requested.
        name: String,
    },
}
