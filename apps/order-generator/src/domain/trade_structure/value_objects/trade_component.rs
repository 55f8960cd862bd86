//! Trade Component Value Object

use serde::{Deserialize, Serialize};

use super::LegDefinition;
use crate::domain::trade_structure::errors::TradeStructureError;

/// An ordered group of legs that becomes one order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeComponent {
    /// Declared number of legs.
    pub number_of_legs: usize,
    /// Legs in order-entry order.
    pub legs: Vec<LegDefinition>,
}

impl TradeComponent {
    /// Smallest absolute leg quantity, or `None` for a component without legs.
    #[must_use]
    pub fn min_quantity(&self) -> Option<u64> {
        self.legs.iter().map(LegDefinition::abs_quantity).min()
    }

    /// Check the component against its own declarations.
    ///
    /// # Errors
    ///
    /// Returns `InvalidComponent` when the leg count disagrees with
    /// `number_of_legs`, a leg is out of position, a quantity is zero, or a
    /// delta target is not a finite non-negative number.
    pub fn validate(&self, trade_name: &str, component: usize) -> Result<(), TradeStructureError> {
        let invalid = |message: String| TradeStructureError::InvalidComponent {
            trade_name: trade_name.to_string(),
            component,
            message,
        };

        if self.legs.is_empty() {
            return Err(invalid("component has no legs".to_string()));
        }

        if self.number_of_legs != self.legs.len() {
            return Err(invalid(format!(
                "number_of_legs is {} but {} legs are defined",
                self.number_of_legs,
                self.legs.len()
            )));
        }

        for (position, leg) in self.legs.iter().enumerate() {
            if leg.leg_id != position {
                return Err(invalid(format!(
                    "leg at position {position} has leg_id {}",
                    leg.leg_id
                )));
            }
            if leg.quantity == 0 {
                return Err(invalid(format!("leg {position} has zero quantity")));
            }
            if !leg.delta.is_finite() || leg.delta < 0.0 {
                return Err(invalid(format!(
                    "leg {position} has invalid delta target {}",
                    leg.delta
                )));
            }
        }

        Ok(())
    }
}
