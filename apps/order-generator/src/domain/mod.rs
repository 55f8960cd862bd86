//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Aggregates**: Consistency boundaries with invariants
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless business logic
//!
//! # Bounded Contexts
//!
//! - [`option_chain`]: Provider chain model, normalization, nearest-match selection
//! - [`trade_structure`]: Leg definitions, trade components, the trade catalog
//! - [`order_entry`]: Trade sizing, direction, expiration labels, order line text

pub mod option_chain;
pub mod order_entry;
pub mod shared;
pub mod trade_structure;
