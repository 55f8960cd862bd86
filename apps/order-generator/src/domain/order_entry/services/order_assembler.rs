//! Order Assembler Domain Service

use rust_decimal::Decimal;

use super::{FirstMatch, TieBreak, number_of_trades};
use crate::domain::option_chain::ContractRecord;
use crate::domain::order_entry::aggregate::{OrderLeg, OrderLine};
use crate::domain::order_entry::errors::AssemblyError;
use crate::domain::order_entry::value_objects::{DataQualityWarning, ExpirationStyle, OrderSide};
use crate::domain::trade_structure::TradeComponent;

/// Builds an [`OrderLine`] from the contracts selected for each leg.
#[derive(Debug, Clone)]
pub struct OrderAssembler<T = FirstMatch> {
    symbol: String,
    multiplier: u32,
    tie_break: T,
}

impl OrderAssembler<FirstMatch> {
    /// Create an assembler that keeps the first of several equally near
    /// contracts.
    #[must_use]
    pub fn new(symbol: impl Into<String>, multiplier: u32) -> Self {
        Self {
            symbol: symbol.into(),
            multiplier,
            tie_break: FirstMatch,
        }
    }
}

impl<T: TieBreak> OrderAssembler<T> {
    /// Replace the tie-break strategy.
    #[must_use]
    pub fn with_tie_break<U: TieBreak>(self, tie_break: U) -> OrderAssembler<U> {
        OrderAssembler {
            symbol: self.symbol,
            multiplier: self.multiplier,
            tie_break,
        }
    }

    /// Order-entry symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Contract multiplier.
    #[must_use]
    pub const fn multiplier(&self) -> u32 {
        self.multiplier
    }

    /// Assemble one order line.
    ///
    /// `selections` holds the nearest-match result of every leg, in leg
    /// order.
    ///
    /// # Errors
    ///
    /// - `SelectionCount` if there is not exactly one selection per leg
    /// - `UnmatchedLeg` if a leg's selection is empty
    /// - `Configuration` if a leg quantity does not divide by the number
    ///   of trades
    pub fn assemble(
        &self,
        component: &TradeComponent,
        selections: Vec<Vec<ContractRecord>>,
    ) -> Result<OrderLine, AssemblyError> {
        if selections.len() != component.legs.len() {
            return Err(AssemblyError::SelectionCount {
                expected: component.legs.len(),
                actual: selections.len(),
            });
        }

        let mut chosen = Vec::with_capacity(selections.len());
        for (leg, candidates) in component.legs.iter().zip(selections) {
            let record = self
                .tie_break
                .choose(leg, candidates)
                .ok_or(AssemblyError::UnmatchedLeg { leg_id: leg.leg_id })?;
            chosen.push((leg, record));
        }

        let min_quantity = component
            .min_quantity()
            .filter(|q| *q > 0)
            .ok_or_else(|| AssemblyError::Configuration {
                message: "component has no non-zero leg quantity".to_string(),
            })?;
        let trades = number_of_trades(min_quantity);
        let divisor = i64::try_from(trades).map_err(|_| AssemblyError::Configuration {
            message: format!("number of trades {trades} is out of range"),
        })?;

        let mut legs = Vec::with_capacity(chosen.len());
        let mut warnings = Vec::new();
        let mut net_premium = Decimal::ZERO;

        for (leg, record) in chosen {
            if leg.quantity % divisor != 0 {
                return Err(AssemblyError::Configuration {
                    message: format!(
                        "leg {} quantity {} is not a multiple of {trades} trades",
                        leg.leg_id, leg.quantity
                    ),
                });
            }

            net_premium += record.premium();

            let style = ExpirationStyle::classify(&record.description);
            if !style.is_handled() {
                let warning = DataQualityWarning {
                    leg_id: leg.leg_id,
                    description: record.description.clone(),
                };
                tracing::warn!(leg_id = leg.leg_id, description = %record.description, "{warning}");
                warnings.push(warning);
            }

            legs.push(OrderLeg {
                leg_id: leg.leg_id,
                expiry_date: record.expiry_date,
                style,
                strike: record.whole_strike(),
                option_type: record.option_type,
                mark: record.mark,
                tranche_quantity: leg.quantity / divisor,
            });
        }

        let prefix_style = legs
            .last()
            .map_or(ExpirationStyle::Unhandled, |leg| leg.style);

        let line = OrderLine {
            side: OrderSide::from_net_premium(net_premium),
            number_of_trades: trades,
            symbol: self.symbol.clone(),
            multiplier: self.multiplier,
            prefix_style,
            legs,
            net_premium,
            warnings,
        };

        tracing::debug!(
            side = %line.side,
            number_of_trades = line.number_of_trades,
            net_premium = %line.net_premium,
            "Assembled order line"
        );

        Ok(line)
    }
}
