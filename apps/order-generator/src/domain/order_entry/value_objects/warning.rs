//! Non-fatal data-quality findings attached to an order line.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A contract description that no expiration style recognized.
///
/// The order line is still produced, carrying the `unhandled` markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataQualityWarning {
    /// Leg whose contract was not recognized.
    pub leg_id: usize,
    /// The description as the provider sent it.
    pub description: String,
}

impl fmt::Display for DataQualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized expiration style on leg {}: {}",
            self.leg_id, self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_display() {
        let warning = DataQualityWarning {
            leg_id: 1,
            description: "NDX Jan 19 2024 16000 Call".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "unrecognized expiration style on leg 1: NDX Jan 19 2024 16000 Call"
        );
    }
}
