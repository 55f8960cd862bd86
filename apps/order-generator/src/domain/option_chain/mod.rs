//! Option Chain Bounded Context
//!
//! This module turns a provider's nested option chain into flat contract
//! records and narrows them to the contracts a leg asks for:
//! - Tagged traversal of the call and put branches
//! - Days-to-expiration and absolute delta annotation
//! - Nearest-match selection on a numeric field

pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::ChainError;
pub use services::{
    MatchField, has_usable_deltas, nearest_match, normalize, normalize_now, select_for_leg,
};
pub use value_objects::{
    ChainBranch, ContractRecord, ExpDateMap, OptionChainRaw, OptionRight, RawContractQuote,
    SENTINEL_DELTA,
};
