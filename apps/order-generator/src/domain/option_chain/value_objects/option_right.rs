//! Option Right Value Object

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::shared::DomainError;

/// Option right (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionRight {
    /// Call option (right to buy).
    Call,
    /// Put option (right to sell).
    Put,
}

impl OptionRight {
    /// Marker used by the quote provider and by order entry.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Call => "CALL",
            Self::Put => "PUT",
        }
    }
}

impl std::fmt::Display for OptionRight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionRight {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CALL" => Ok(Self::Call),
            "PUT" => Ok(Self::Put),
            other => Err(DomainError::InvalidValue {
                field: "option_type".to_string(),
                message: format!("expected CALL or PUT, got '{other}'"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_right_display() {
        assert_eq!(OptionRight::Call.to_string(), "CALL");
        assert_eq!(OptionRight::Put.to_string(), "PUT");
    }

    #[test]
    fn option_right_serde() {
        let json = serde_json::to_string(&OptionRight::Put).unwrap();
        assert_eq!(json, "\"PUT\"");

        let parsed: OptionRight = serde_json::from_str("\"CALL\"").unwrap();
        assert_eq!(parsed, OptionRight::Call);
    }

    #[test]
    fn option_right_from_str() {
        assert_eq!("PUT".parse::<OptionRight>().unwrap(), OptionRight::Put);
        assert!("call".parse::<OptionRight>().is_err());
        assert!("".parse::<OptionRight>().is_err());
    }
}
