//! Order Entry Bounded Context
//!
//! Turns per-leg contract selections into a CUSTOM order line:
//! - Trade-size divisor and per-tranche leg quantities
//! - Net direction from signed premium
//! - Expiration style labels from contract descriptions
//! - Pluggable tie-break for legs that matched more than one contract

pub mod aggregate;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use aggregate::{OrderLeg, OrderLine};
pub use errors::AssemblyError;
pub use services::{FirstMatch, OrderAssembler, TieBreak, is_prime, number_of_trades};
pub use value_objects::{DataQualityWarning, ExpirationStyle, OrderSide};
