//! Trade Catalog Port (Driven Port)
//!
//! Interface for loading the user's trade structure definitions.

use async_trait::async_trait;

use crate::domain::trade_structure::{TradeCatalog, TradeStructureError};

/// Trade catalog port error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The catalog source could not be read.
    #[error("Failed to read trade catalog {path}: {message}")]
    Read {
        /// Catalog location.
        path: String,
        /// Error details.
        message: String,
    },

    /// The catalog source is not valid JSON of the expected shape.
    #[error("Failed to parse trade catalog {path}: {message}")]
    Parse {
        /// Catalog location.
        path: String,
        /// Parser message.
        message: String,
    },

    /// The catalog parsed but violates a structural rule.
    #[error("Invalid trade catalog: {0}")]
    Invalid(#[from] TradeStructureError),
}

/// Port for trade catalog access.
#[async_trait]
pub trait TradeCatalogPort: Send + Sync {
    /// Load and validate the current catalog.
    ///
    /// Called once per command so edits to the source take effect without
    /// restarting the session.
    async fn load(&self) -> Result<TradeCatalog, CatalogError>;
}
