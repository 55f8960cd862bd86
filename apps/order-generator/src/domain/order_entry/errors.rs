//! Order Assembly Errors

use thiserror::Error;

/// Errors raised while assembling an order line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    /// No contract matched a leg.
    #[error("No contract matched leg {leg_id}")]
    UnmatchedLeg {
        /// Leg that had an empty selection.
        leg_id: usize,
    },

    /// Declared quantities do not divide into the computed number of trades.
    #[error("Inconsistent trade structure: {message}")]
    Configuration {
        /// What did not divide.
        message: String,
    },

    /// The number of selections handed over differs from the number of legs.
    #[error("Expected {expected} leg selections, got {actual}")]
    SelectionCount {
        /// Legs in the component.
        expected: usize,
        /// Selections provided.
        actual: usize,
    },
}
