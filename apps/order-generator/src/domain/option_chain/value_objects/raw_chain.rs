//! Provider option chain, as received.
//!
//! The chain is two branches (calls and puts), each a mapping from an
//! expiration label such as `"2024-01-19:3"` to a strike label such as
//! `"4500.0"` to a list of quotes. Only the first quote per strike is
//! authoritative.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use super::OptionRight;

/// Delta the provider reports when it has no greeks for a contract.
pub const SENTINEL_DELTA: f64 = -999.0;

/// Expiration label -> strike label -> quotes, in provider order.
pub type ExpDateMap = IndexMap<String, IndexMap<String, Vec<RawContractQuote>>>;

/// One of the two top-level branches of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainBranch {
    /// `callExpDateMap`.
    Call,
    /// `putExpDateMap`.
    Put,
}

impl ChainBranch {
    /// Both branches in traversal order.
    pub const ALL: [Self; 2] = [Self::Call, Self::Put];

    /// Lowercase label used in logs and errors.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Put => "put",
        }
    }

    /// Option right the branch is expected to hold.
    #[must_use]
    pub const fn right(&self) -> OptionRight {
        match self {
            Self::Call => OptionRight::Call,
            Self::Put => OptionRight::Put,
        }
    }
}

/// Option chain response from the quote provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionChainRaw {
    /// Underlying symbol echoed by the provider.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Provider status (`SUCCESS` / `FAILED`).
    #[serde(default)]
    pub status: Option<String>,
    /// Call contracts.
    #[serde(default)]
    pub call_exp_date_map: ExpDateMap,
    /// Put contracts.
    #[serde(default)]
    pub put_exp_date_map: ExpDateMap,
}

impl OptionChainRaw {
    /// Borrow one branch of the chain.
    #[must_use]
    pub const fn branch(&self, branch: ChainBranch) -> &ExpDateMap {
        match branch {
            ChainBranch::Call => &self.call_exp_date_map,
            ChainBranch::Put => &self.put_exp_date_map,
        }
    }

    /// First branch that has no expirations, if any.
    #[must_use]
    pub fn empty_branch(&self) -> Option<ChainBranch> {
        ChainBranch::ALL
            .into_iter()
            .find(|b| self.branch(*b).is_empty())
    }

    /// Authoritative (first) quote of every strike, with its labels.
    pub fn quotes(
        &self,
        branch: ChainBranch,
    ) -> impl Iterator<Item = (&str, &str, Option<&RawContractQuote>)> {
        self.branch(branch).iter().flat_map(|(expiration, strikes)| {
            strikes
                .iter()
                .map(move |(strike, quotes)| (expiration.as_str(), strike.as_str(), quotes.first()))
        })
    }

    /// Total number of strikes across both branches.
    #[must_use]
    pub fn strike_count(&self) -> usize {
        ChainBranch::ALL
            .into_iter()
            .map(|b| self.branch(b).values().map(IndexMap::len).sum::<usize>())
            .sum()
    }
}

/// A single contract quote inside the chain.
///
/// Fields the normalizer needs are optional here so that a missing value
/// surfaces as a data-format error naming the field, not as an opaque
/// deserialization failure of the whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContractQuote {
    /// `CALL` or `PUT`.
    #[serde(default)]
    pub put_call: Option<String>,
    /// OCC-style contract symbol.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Human readable description, e.g. `"SPXW Jan 19 2024 4500 Call (PM)"`.
    #[serde(default)]
    pub description: Option<String>,
    /// Strike price.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub strike_price: Option<f64>,
    /// Mark price.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub mark: Option<f64>,
    /// Delta, or [`SENTINEL_DELTA`] when unavailable.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub delta: Option<f64>,
    /// Expiration as epoch milliseconds.
    #[serde(default)]
    pub expiration_date: Option<i64>,
    /// Days to expiration as computed by the provider.
    #[serde(default)]
    pub days_to_expiration: Option<i64>,
}

/// The provider writes `"NaN"` for some greeks; accept numbers or numeric text.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
