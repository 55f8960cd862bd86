//! Option Chain Domain Services

mod nearest_match;
mod normalizer;

pub use nearest_match::{MatchField, nearest_match, select_for_leg};
pub use normalizer::{has_usable_deltas, normalize, normalize_now};
