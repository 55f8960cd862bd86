//! Nearest-match selection.

use crate::domain::option_chain::value_objects::ContractRecord;
use crate::domain::trade_structure::LegDefinition;

/// Numeric field of a [`ContractRecord`] that can be matched against a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchField {
    /// `days_to_expiration`.
    DaysToExpiration,
    /// `absolute_delta`.
    AbsoluteDelta,
}

impl MatchField {
    /// Read the field from a record.
    #[must_use]
    pub fn value(&self, record: &ContractRecord) -> f64 {
        match self {
            Self::DaysToExpiration => record.days_to_expiration as f64,
            Self::AbsoluteDelta => record.absolute_delta,
        }
    }

    /// Field name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DaysToExpiration => "days_to_expiration",
            Self::AbsoluteDelta => "absolute_delta",
        }
    }
}

/// Every candidate whose `field` is at minimal distance from `target`.
///
/// Ties are all returned, in input order. An empty input yields an empty
/// output.
#[must_use]
pub fn nearest_match(
    target: f64,
    field: MatchField,
    candidates: &[ContractRecord],
) -> Vec<ContractRecord> {
    let distance = |record: &ContractRecord| (field.value(record) - target).abs();

    let Some(best) = candidates.iter().map(distance).reduce(f64::min) else {
        return Vec::new();
    };

    candidates
        .iter()
        .filter(|&record| distance(record) == best)
        .cloned()
        .collect()
}

/// Narrow `records` for `leg`: nearest DTE first, then nearest absolute delta.
#[must_use]
pub fn select_for_leg(records: &[ContractRecord], leg: &LegDefinition) -> Vec<ContractRecord> {
    let by_expiration = nearest_match(leg.dte as f64, MatchField::DaysToExpiration, records);
    let selection = nearest_match(leg.delta, MatchField::AbsoluteDelta, &by_expiration);

    tracing::debug!(
        leg_id = leg.leg_id,
        after_dte = by_expiration.len(),
        after_delta = selection.len(),
        "Selected contracts for leg"
    );

    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::option_chain::value_objects::OptionRight;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn record(strike: i64, dte: i64, abs_delta: f64) -> ContractRecord {
        ContractRecord {
            ticker: "$SPX.X".to_string(),
            expiry_date: Utc.with_ymd_and_hms(2024, 2, 16, 21, 0, 0).unwrap(),
            option_type: OptionRight::Put,
            strike_price: Decimal::from(strike),
            description: "SPX Feb 16 2024 Put (AM)".to_string(),
            mark: Decimal::ONE,
            quantity: 1,
            days_to_expiration: dte,
            absolute_delta: abs_delta,
        }
    }

    fn strikes(records: &[ContractRecord]) -> Vec<Decimal> {
        records.iter().map(|r| r.strike_price).collect()
    }

    #[test]
    fn empty_candidates_yield_empty() {
        assert!(nearest_match(30.0, MatchField::DaysToExpiration, &[]).is_empty());
    }

    #[test]
    fn single_nearest_is_returned() {
        let candidates = vec![record(1, 10, 5.0), record(2, 28, 5.0), record(3, 45, 5.0)];
        let best = nearest_match(30.0, MatchField::DaysToExpiration, &candidates);
        assert_eq!(strikes(&best), vec![Decimal::from(2)]);
    }

    #[test]
    fn equidistant_ties_are_all_returned_in_order() {
        let candidates = vec![record(1, 32, 5.0), record(2, 40, 5.0), record(3, 28, 5.0)];
        let best = nearest_match(30.0, MatchField::DaysToExpiration, &candidates);
        assert_eq!(strikes(&best), vec![Decimal::from(1), Decimal::from(3)]);
    }

    #[test]
    fn select_for_leg_narrows_dte_then_delta() {
        let candidates = vec![
            record(4300, 45, 10.0),
            record(4400, 45, 15.5),
            record(4450, 45, 22.0),
            record(4420, 44, 16.0),
            record(4500, 60, 16.0),
        ];
        let leg = LegDefinition {
            leg_id: 0,
            option_type: OptionRight::Put,
            dte: 45,
            delta: 16.0,
            quantity: -1,
        };

        let selection = select_for_leg(&candidates, &leg);
        assert_eq!(strikes(&selection), vec![Decimal::from(4400)]);
    }

    #[test]
    fn select_for_leg_keeps_unresolved_ties() {
        let candidates = vec![record(4400, 45, 16.0), record(4405, 45, 16.0)];
        let leg = LegDefinition {
            leg_id: 1,
            option_type: OptionRight::Put,
            dte: 45,
            delta: 16.0,
            quantity: 1,
        };
        assert_eq!(select_for_leg(&candidates, &leg).len(), 2);
    }

    proptest! {
        #[test]
        fn nearest_match_returns_minimal_distance_subset(
            values in prop::collection::vec((0i64..120, 0.0f64..100.0), 1..40),
            target in 0.0f64..120.0,
        ) {
            let candidates: Vec<ContractRecord> = values
                .iter()
                .enumerate()
                .map(|(i, (dte, delta))| record(i as i64, *dte, *delta))
                .collect();

            for field in [MatchField::DaysToExpiration, MatchField::AbsoluteDelta] {
                let best = nearest_match(target, field, &candidates);
                prop_assert!(!best.is_empty());

                let min = candidates
                    .iter()
                    .map(|r| (field.value(r) - target).abs())
                    .fold(f64::INFINITY, f64::min);
                for r in &best {
                    prop_assert_eq!((field.value(r) - target).abs(), min);
                    prop_assert!(candidates.contains(r));
                }

                // Input order is preserved.
                let positions: Vec<usize> = best
                    .iter()
                    .map(|r| candidates.iter().position(|c| c == r).unwrap())
                    .collect();
                prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }
}
