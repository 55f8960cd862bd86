//! Trade Structure Value Object

use serde::{Deserialize, Serialize};

use super::TradeComponent;
use crate::domain::trade_structure::errors::TradeStructureError;

/// A named trade made of one or more components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeStructure {
    /// Name the user types to select the trade.
    pub trade_name: String,
    /// Components, each rendered as its own order line.
    pub trade_components: Vec<TradeComponent>,
}

impl TradeStructure {
    /// Whether `input` selects this trade.
    ///
    /// Matches the stored name exactly, or its lowercase form.
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        self.trade_name == input || self.trade_name.to_lowercase() == input
    }

    /// Validate every component.
    pub fn validate(&self) -> Result<(), TradeStructureError> {
        if self.trade_components.is_empty() {
            return Err(TradeStructureError::EmptyTrade {
                trade_name: self.trade_name.clone(),
            });
        }

        self.trade_components
            .iter()
            .enumerate()
            .try_for_each(|(i, component)| component.validate(&self.trade_name, i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trade(name: &str) -> TradeStructure {
        TradeStructure {
            trade_name: name.to_string(),
            trade_components: vec![],
        }
    }

    #[test]
    fn matches_exact_or_lowercase() {
        let t = trade("Iron Condor");
        assert!(t.matches("Iron Condor"));
        assert!(t.matches("iron condor"));
        assert!(!t.matches("IRON CONDOR"));
        assert!(!t.matches("iron"));
    }

    #[test]
    fn trade_without_components_is_invalid() {
        assert_eq!(
            trade("Empty").validate(),
            Err(TradeStructureError::EmptyTrade {
                trade_name: "Empty".to_string()
            })
        );
    }
}
