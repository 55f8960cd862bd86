//! Option Chain Value Objects

mod contract_record;
mod option_right;
mod raw_chain;

pub use contract_record::ContractRecord;
pub use option_right::OptionRight;
pub use raw_chain::{ChainBranch, ExpDateMap, OptionChainRaw, RawContractQuote, SENTINEL_DELTA};
