//! Contract Record Value Object

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::OptionRight;

/// A flattened option contract annotated for leg matching.
///
/// `quantity` comes from the leg definition that requested the contract,
/// not from the market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractRecord {
    /// Underlying symbol the chain was fetched for.
    pub ticker: String,
    /// Expiration timestamp.
    pub expiry_date: DateTime<Utc>,
    /// Call or put.
    pub option_type: OptionRight,
    /// Strike price.
    pub strike_price: Decimal,
    /// Provider description, used to classify the expiration style.
    pub description: String,
    /// Mark price.
    pub mark: Decimal,
    /// Signed leg quantity.
    pub quantity: i64,
    /// Whole days between the normalization time and expiration.
    pub days_to_expiration: i64,
    /// `|delta * 100|`.
    pub absolute_delta: f64,
}

impl ContractRecord {
    /// Signed premium contribution of this contract (`quantity * mark`).
    #[must_use]
    pub fn premium(&self) -> Decimal {
        Decimal::from(self.quantity) * self.mark
    }

    /// Strike truncated to a whole number, as order entry expects.
    #[must_use]
    pub fn whole_strike(&self) -> Decimal {
        self.strike_price.trunc()
    }
}
