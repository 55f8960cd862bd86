//! Leg Definition Value Object

use serde::{Deserialize, Serialize};

use crate::domain::option_chain::OptionRight;

/// One leg of a trade component, as configured in the trade catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegDefinition {
    /// Ordinal position of the leg within its component.
    pub leg_id: usize,
    /// Call or put.
    pub option_type: OptionRight,
    /// Target days to expiration.
    pub dte: i64,
    /// Target absolute delta, in delta points (16 means 0.16).
    pub delta: f64,
    /// Signed quantity: negative sells, positive buys.
    pub quantity: i64,
}

impl LegDefinition {
    /// Unsigned quantity.
    #[must_use]
    pub const fn abs_quantity(&self) -> u64 {
        self.quantity.unsigned_abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leg_deserializes_catalog_shape() {
        let json = r#"{"leg_id": 1, "option_type": "PUT", "dte": 45, "delta": 16, "quantity": -2}"#;
        let leg: LegDefinition = serde_json::from_str(json).unwrap();

        assert_eq!(leg.leg_id, 1);
        assert_eq!(leg.option_type, OptionRight::Put);
        assert_eq!(leg.dte, 45);
        assert!((leg.delta - 16.0).abs() < f64::EPSILON);
        assert_eq!(leg.abs_quantity(), 2);
    }
}
