//! Chain normalization.
//!
//! Flattens the provider's nested chain into [`ContractRecord`]s for one leg.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::domain::option_chain::errors::ChainError;
use crate::domain::option_chain::value_objects::{
    ChainBranch, ContractRecord, OptionChainRaw, OptionRight, SENTINEL_DELTA,
};
use crate::domain::trade_structure::LegDefinition;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Flatten `raw` into records for `leg`, as of `as_of`.
///
/// Both branches are traversed. A record is emitted only when the quote's
/// own `putCall` marker matches the leg's option type and its delta is
/// usable. Every quote must carry the fields a record is built from, even
/// when it is later filtered out.
pub fn normalize(
    raw: &OptionChainRaw,
    leg: &LegDefinition,
    ticker: &str,
    as_of: DateTime<Utc>,
) -> Result<Vec<ContractRecord>, ChainError> {
    let mut records = Vec::new();

    for branch in ChainBranch::ALL {
        for (expiration, strike, quote) in raw.quotes(branch) {
            let malformed = |field: &str| ChainError::DataFormat {
                expiration: expiration.to_string(),
                strike: strike.to_string(),
                field: field.to_string(),
            };

            let quote = quote.ok_or_else(|| malformed("quotes"))?;
            let option_type: OptionRight = quote
                .put_call
                .as_deref()
                .ok_or_else(|| malformed("putCall"))?
                .parse()
                .map_err(|_| malformed("putCall"))?;
            if option_type != branch.right() {
                tracing::debug!(
                    branch = branch.label(),
                    expiration,
                    strike,
                    put_call = %option_type,
                    "Quote marker disagrees with its branch"
                );
            }
            let expiry_date = quote
                .expiration_date
                .and_then(DateTime::from_timestamp_millis)
                .ok_or_else(|| malformed("expirationDate"))?;
            let strike_price = quote
                .strike_price
                .and_then(Decimal::from_f64)
                .ok_or_else(|| malformed("strikePrice"))?;
            let mark = quote
                .mark
                .and_then(Decimal::from_f64)
                .ok_or_else(|| malformed("mark"))?;
            let description = quote
                .description
                .clone()
                .ok_or_else(|| malformed("description"))?;
            let delta = quote.delta.ok_or_else(|| malformed("delta"))?;

            if option_type != leg.option_type || !is_usable_delta(delta) {
                continue;
            }

            records.push(ContractRecord {
                ticker: ticker.to_string(),
                expiry_date,
                option_type,
                strike_price,
                description,
                mark,
                quantity: leg.quantity,
                days_to_expiration: days_between(as_of, expiry_date),
                absolute_delta: (delta * 100.0).abs(),
            });
        }
    }

    tracing::debug!(
        leg_id = leg.leg_id,
        option_type = %leg.option_type,
        target_dte = leg.dte,
        target_delta = leg.delta,
        candidates = records.len(),
        "Normalized option chain"
    );

    Ok(records)
}

/// [`normalize`] against the current wall-clock time.
pub fn normalize_now(
    raw: &OptionChainRaw,
    leg: &LegDefinition,
    ticker: &str,
) -> Result<Vec<ContractRecord>, ChainError> {
    normalize(raw, leg, ticker, Utc::now())
}

/// Whether any quote in either branch carries a usable delta.
///
/// A chain where every delta is the sentinel is structurally valid but
/// useless for matching.
#[must_use]
pub fn has_usable_deltas(raw: &OptionChainRaw) -> bool {
    ChainBranch::ALL.into_iter().any(|branch| {
        raw.quotes(branch)
            .filter_map(|(_, _, quote)| quote.and_then(|q| q.delta))
            .any(is_usable_delta)
    })
}

fn is_usable_delta(delta: f64) -> bool {
    delta.is_finite() && delta != SENTINEL_DELTA
}

/// Whole days from `from` to `to`, rounded toward negative infinity.
fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}
