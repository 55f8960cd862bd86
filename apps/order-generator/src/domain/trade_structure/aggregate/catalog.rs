//! Trade Catalog Aggregate

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::trade_structure::errors::TradeStructureError;
use crate::domain::trade_structure::value_objects::TradeStructure;

/// The set of named trades available for a session.
///
/// Invariants: names are unique and every trade is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeCatalog {
    trade_structures: Vec<TradeStructure>,
}

impl TradeCatalog {
    /// Build a catalog, validating every trade.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure.
    pub fn new(trade_structures: Vec<TradeStructure>) -> Result<Self, TradeStructureError> {
        let catalog = Self { trade_structures };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check names are unique and every trade is well formed.
    pub fn validate(&self) -> Result<(), TradeStructureError> {
        let mut seen = HashSet::new();
        for trade in &self.trade_structures {
            if !seen.insert(trade.trade_name.as_str()) {
                return Err(TradeStructureError::DuplicateName {
                    trade_name: trade.trade_name.clone(),
                });
            }
            trade.validate()?;
        }
        Ok(())
    }

    /// Look a trade up by the name the user typed.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no trade matches.
    pub fn find(&self, input: &str) -> Result<&TradeStructure, TradeStructureError> {
        self.trade_structures
            .iter()
            .find(|t| t.matches(input))
            .ok_or_else(|| TradeStructureError::NotFound {
                name: input.to_string(),
            })
    }

    /// Trade names in catalog order, for the menu.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.trade_structures.iter().map(|t| t.trade_name.as_str())
    }

    /// Number of trades.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trade_structures.len()
    }

    /// Check if the catalog has no trades.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trade_structures.is_empty()
    }
}
