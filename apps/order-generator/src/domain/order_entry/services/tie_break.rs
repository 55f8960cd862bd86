//! Reduction of a leg's candidate set to a single contract.

use std::fmt::Debug;

use crate::domain::option_chain::ContractRecord;
use crate::domain::trade_structure::LegDefinition;

/// Picks one contract when nearest-match selection left several.
pub trait TieBreak: Debug + Send + Sync {
    /// Choose one of `candidates` for `leg`, or `None` when there are none.
    fn choose(&self, leg: &LegDefinition, candidates: Vec<ContractRecord>) -> Option<ContractRecord>;
}

/// Keeps the first candidate in chain order.
///
/// Chain order is the order the provider listed expirations and strikes
/// in, so among equally near contracts the one quoted first wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMatch;

impl TieBreak for FirstMatch {
    fn choose(&self, leg: &LegDefinition, candidates: Vec<ContractRecord>) -> Option<ContractRecord> {
        if candidates.len() > 1 {
            tracing::debug!(
                leg_id = leg.leg_id,
                candidates = candidates.len(),
                "Ambiguous selection, keeping first match"
            );
        }
        candidates.into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::option_chain::OptionRight;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn record(strike: i64) -> ContractRecord {
        ContractRecord {
            ticker: "$SPX.X".to_string(),
            expiry_date: Utc.with_ymd_and_hms(2024, 2, 16, 21, 0, 0).unwrap(),
            option_type: OptionRight::Call,
            strike_price: Decimal::from(strike),
            description: "SPX Feb 16 2024 Call (AM)".to_string(),
            mark: Decimal::ONE,
            quantity: 1,
            days_to_expiration: 30,
            absolute_delta: 20.0,
        }
    }

    fn leg() -> LegDefinition {
        LegDefinition {
            leg_id: 0,
            option_type: OptionRight::Call,
            dte: 30,
            delta: 20.0,
            quantity: 1,
        }
    }

    #[test]
    fn first_match_keeps_first() {
        let chosen = FirstMatch.choose(&leg(), vec![record(4800), record(4805)]);
        assert_eq!(chosen.map(|r| r.strike_price), Some(Decimal::from(4800)));
    }

    #[test]
    fn first_match_follows_provider_strike_order() {
        use crate::domain::option_chain::{OptionChainRaw, normalize, select_for_leg};

        // "1000.0" sorts before "950.0" as text; the provider listed 950 first.
        let raw: OptionChainRaw = serde_json::from_str(
            r#"{"putExpDateMap": {"2024-02-01:30": {
                "950.0": [{"putCall": "PUT", "description": "SPXW Feb 01 2024 950 Put (PM)",
                           "strikePrice": 950.0, "mark": 0.05, "delta": -0.01,
                           "expirationDate": 1706821200000}],
                "1000.0": [{"putCall": "PUT", "description": "SPXW Feb 01 2024 1000 Put (PM)",
                            "strikePrice": 1000.0, "mark": 0.05, "delta": -0.01,
                            "expirationDate": 1706821200000}]
            }}}"#,
        )
        .unwrap();
        let leg = LegDefinition {
            leg_id: 0,
            option_type: OptionRight::Put,
            dte: 30,
            delta: 1.0,
            quantity: -1,
        };
        let as_of = Utc.with_ymd_and_hms(2024, 1, 2, 15, 0, 0).unwrap();

        let records = normalize(&raw, &leg, "$SPX.X", as_of).unwrap();
        let candidates = select_for_leg(&records, &leg);
        assert_eq!(candidates.len(), 2);

        let chosen = FirstMatch.choose(&leg, candidates);
        assert_eq!(chosen.map(|r| r.strike_price), Some(Decimal::from(950)));
    }

    #[test]
    fn first_match_on_empty_is_none() {
        assert!(FirstMatch.choose(&leg(), vec![]).is_none());
    }
}
