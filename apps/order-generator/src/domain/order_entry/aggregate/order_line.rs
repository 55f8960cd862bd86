//! CUSTOM order line for a multi-leg trade component.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::option_chain::OptionRight;
use crate::domain::order_entry::value_objects::{DataQualityWarning, ExpirationStyle, OrderSide};

/// One selected contract as it appears in the order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLeg {
    /// Leg ordinal.
    pub leg_id: usize,
    /// Contract expiration.
    pub expiry_date: DateTime<Utc>,
    /// Expiration style read from the contract description.
    pub style: ExpirationStyle,
    /// Strike price.
    pub strike: Decimal,
    /// Call or put.
    pub option_type: OptionRight,
    /// Mark price at selection time.
    pub mark: Decimal,
    /// Leg quantity per trade.
    pub tranche_quantity: i64,
}

impl OrderLeg {
    /// `DD MON YY` plus the style suffix, e.g. `19 JAN 24 [AM]`.
    #[must_use]
    pub fn expiration_label(&self) -> String {
        format!(
            "{} {} {}{}",
            self.expiry_date.format("%d"),
            self.expiry_date.format("%b").to_string().to_uppercase(),
            self.expiry_date.format("%y"),
            self.style.suffix()
        )
    }

    /// Strike without its fractional part.
    #[must_use]
    pub fn strike_label(&self) -> String {
        self.strike.trunc().to_string()
    }
}

/// An assembled order line.
///
/// Renders as
/// `<BUY|SELL> +<trades> <tranche> CUSTOM <symbol> <multiplier> <prefix> <expirations> <strikes> <types> @ LMT`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Net direction.
    pub side: OrderSide,
    /// How many times the tranche is traded.
    pub number_of_trades: u64,
    /// Order-entry symbol.
    pub symbol: String,
    /// Contract multiplier.
    pub multiplier: u32,
    /// Style whose prefix labels the expiration list.
    pub prefix_style: ExpirationStyle,
    /// Selected contracts in leg order.
    pub legs: Vec<OrderLeg>,
    /// Signed sum of leg quantity times mark.
    pub net_premium: Decimal,
    /// Non-fatal findings.
    pub warnings: Vec<DataQualityWarning>,
}

impl OrderLine {
    /// Per-trade leg quantities joined with `/`.
    #[must_use]
    pub fn tranche(&self) -> String {
        self.join(|leg| leg.tranche_quantity.to_string())
    }

    /// Expiration labels joined with `/`.
    #[must_use]
    pub fn expirations(&self) -> String {
        self.join(OrderLeg::expiration_label)
    }

    /// Strikes joined with `/`.
    #[must_use]
    pub fn strikes(&self) -> String {
        self.join(OrderLeg::strike_label)
    }

    /// Option types joined with `/`.
    #[must_use]
    pub fn option_types(&self) -> String {
        self.join(|leg| leg.option_type.to_string())
    }

    /// Check if any leg carried an unrecognized expiration style.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    fn join(&self, f: impl Fn(&OrderLeg) -> String) -> String {
        self.legs.iter().map(f).collect::<Vec<_>>().join("/")
    }
}

impl fmt::Display for OrderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} +{} {} CUSTOM {} {} {} {} {} {} @ LMT",
            self.side,
            self.number_of_trades,
            self.tranche(),
            self.symbol,
            self.multiplier,
            self.prefix_style.prefix(),
            self.expirations(),
            self.strikes(),
            self.option_types()
        )
    }
}
