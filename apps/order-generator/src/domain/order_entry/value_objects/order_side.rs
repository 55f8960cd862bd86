//! Order side (buy or sell).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side (buy or sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    /// Net debit or even.
    Buy,
    /// Net credit.
    Sell,
}

impl OrderSide {
    /// Side implied by the signed net premium of all legs.
    ///
    /// Negative is `Sell`; zero and positive are `Buy`.
    #[must_use]
    pub fn from_net_premium(net_premium: Decimal) -> Self {
        if net_premium < Decimal::ZERO {
            Self::Sell
        } else {
            Self::Buy
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}
