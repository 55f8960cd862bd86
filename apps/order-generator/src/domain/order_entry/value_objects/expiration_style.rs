//! Expiration style, read from a contract description.

use serde::{Deserialize, Serialize};

/// Settlement/listing style of an expiration, as order entry labels it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpirationStyle {
    /// AM-settled standard SPX expiration.
    AmSettled,
    /// PM-settled quarterly expiration.
    Quarterly,
    /// PM-settled SPXW weekly expiration.
    Weekly,
    /// Description did not match any known pattern.
    Unhandled,
}

impl ExpirationStyle {
    /// Marker written when the style is not recognized.
    pub const UNHANDLED_MARKER: &'static str = "unhandled";

    /// Classify a provider description.
    ///
    /// Checks are case-sensitive substring matches, first match wins.
    #[must_use]
    pub fn classify(description: &str) -> Self {
        let has = |needle: &str| description.contains(needle);

        if has("AM") && has("SPX ") {
            Self::AmSettled
        } else if has("PM") && has("Quarterly") {
            Self::Quarterly
        } else if has("PM") && has("SPXW ") {
            Self::Weekly
        } else {
            Self::Unhandled
        }
    }

    /// Label placed before the expiration list.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::AmSettled => "",
            Self::Quarterly => "(Quarterlys)",
            Self::Weekly => "(Weeklys)",
            Self::Unhandled => Self::UNHANDLED_MARKER,
        }
    }

    /// Label appended to each expiration date.
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::AmSettled => " [AM]",
            Self::Quarterly | Self::Weekly => "",
            Self::Unhandled => Self::UNHANDLED_MARKER,
        }
    }

    /// Check if the description was recognized.
    #[must_use]
    pub const fn is_handled(&self) -> bool {
        !matches!(self, Self::Unhandled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("SPX Jan 19 2024 4500 Call (AM)", ExpirationStyle::AmSettled ; "monthly am")]
    #[test_case("SPX Mar 28 2024 4500 Put (Quarterly) (PM)", ExpirationStyle::Quarterly ; "quarterly pm")]
    #[test_case("SPXW Jan 31 2024 4500 Put (PM)", ExpirationStyle::Weekly ; "weekly pm")]
    #[test_case("SPXW Mar 28 2024 4500 Put (Quarterly) (PM)", ExpirationStyle::Quarterly ; "quarterly wins over weekly")]
    #[test_case("SPXW Jan 19 2024 4500 Call (AM)", ExpirationStyle::Unhandled ; "weekly root with am")]
    #[test_case("SPX Jan 19 2024 4500 Call (am)", ExpirationStyle::Unhandled ; "case sensitive")]
    #[test_case("NDX Jan 19 2024 16000 Call (PM)", ExpirationStyle::Unhandled ; "other root")]
    #[test_case("", ExpirationStyle::Unhandled ; "empty")]
    fn classify(description: &str, expected: ExpirationStyle) {
        assert_eq!(ExpirationStyle::classify(description), expected);
    }

    #[test]
    fn am_settled_labels() {
        let style = ExpirationStyle::classify("SPX Jan 19 2024 4500 Call (AM)");
        assert_eq!(style.prefix(), "");
        assert_eq!(style.suffix(), " [AM]");
    }

    #[test]
    fn pm_labels() {
        assert_eq!(ExpirationStyle::Quarterly.prefix(), "(Quarterlys)");
        assert_eq!(ExpirationStyle::Quarterly.suffix(), "");
        assert_eq!(ExpirationStyle::Weekly.prefix(), "(Weeklys)");
        assert_eq!(ExpirationStyle::Weekly.suffix(), "");
    }

    #[test]
    fn unhandled_labels() {
        let style = ExpirationStyle::Unhandled;
        assert_eq!(style.prefix(), "unhandled");
        assert_eq!(style.suffix(), "unhandled");
        assert!(!style.is_handled());
    }
}
