//! Crate-level error handling for the order generator.
//!
//! Every bounded context and adapter has its own `thiserror` enum; this
//! module aggregates them into [`GeneratorError`] and classifies each with
//! an [`ErrorCode`].
//!
//! | Code | Retryable | Usage |
//! |------|-----------|-------|
//! | `INVALID_CONFIG` | no | Config file unreadable or invalid |
//! | `CATALOG_UNAVAILABLE` | no | Trade structures file unreadable or invalid |
//! | `TRADE_NOT_FOUND` | no | Unknown trade name typed by the user |
//! | `PROVIDER_UNAVAILABLE` | yes | Transport failure or 5xx from the provider |
//! | `PROVIDER_REJECTED` | no | Missing key, 4xx, or undecodable response |
//! | `RATE_LIMITED` | yes | Provider throttled the request |
//! | `BAD_OPTION_DATA` | yes | Empty branches, all-sentinel deltas, malformed quotes |
//! | `UNMATCHED_LEG` | no | No contract matched a leg |
//! | `INCONSISTENT_TRADE` | no | Quantities do not split into whole tranches |
//! | `OUTPUT_FAILED` | no | Order file or console could not be written |

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::ports::{CatalogError, ProviderError, SinkError};
use crate::config::ConfigError;
use crate::domain::option_chain::ChainError;
use crate::domain::order_entry::AssemblyError;
use crate::domain::trade_structure::TradeStructureError;

/// Error codes for the order generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Configuration could not be loaded.
    InvalidConfig,
    /// Trade catalog could not be loaded.
    CatalogUnavailable,
    /// No trade with the requested name.
    TradeNotFound,
    /// Provider unreachable or failing.
    ProviderUnavailable,
    /// Provider refused the request or sent garbage.
    ProviderRejected,
    /// Provider throttled the request.
    RateLimited,
    /// Chain content unusable for selection.
    BadOptionData,
    /// A leg matched no contract.
    UnmatchedLeg,
    /// Trade quantities are inconsistent.
    InconsistentTrade,
    /// Order output failed.
    OutputFailed,
}

impl ErrorCode {
    /// Get the error reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidConfig => "INVALID_CONFIG",
            Self::CatalogUnavailable => "CATALOG_UNAVAILABLE",
            Self::TradeNotFound => "TRADE_NOT_FOUND",
            Self::ProviderUnavailable => "PROVIDER_UNAVAILABLE",
            Self::ProviderRejected => "PROVIDER_REJECTED",
            Self::RateLimited => "RATE_LIMITED",
            Self::BadOptionData => "BAD_OPTION_DATA",
            Self::UnmatchedLeg => "UNMATCHED_LEG",
            Self::InconsistentTrade => "INCONSISTENT_TRADE",
            Self::OutputFailed => "OUTPUT_FAILED",
        }
    }

    /// Check if trying the same command again later may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ProviderUnavailable | Self::RateLimited | Self::BadOptionData
        )
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// Problems with what the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserInputError {
    /// The trade name is not in the catalog.
    #[error("Trade not found in trade_structures file: {name}")]
    TradeNotFound {
        /// Name as typed.
        name: String,
    },
}

/// Any error the order generator can surface.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Configuration problem.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Trade catalog problem.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// User input problem.
    #[error(transparent)]
    UserInput(#[from] UserInputError),

    /// Quote provider problem.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Option chain content problem.
    #[error(transparent)]
    Chain(#[from] ChainError),

    /// Order assembly problem.
    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    /// Order output problem.
    #[error(transparent)]
    Sink(#[from] SinkError),

    /// Reading from or writing to the console failed.
    #[error("Console I/O error: {0}")]
    Console(#[from] std::io::Error),
}

impl GeneratorError {
    /// Classify the error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Config(_) => ErrorCode::InvalidConfig,
            Self::Catalog(_) => ErrorCode::CatalogUnavailable,
            Self::UserInput(UserInputError::TradeNotFound { .. }) => ErrorCode::TradeNotFound,
            Self::Provider(ProviderError::RateLimited) => ErrorCode::RateLimited,
            Self::Provider(e) => {
                if e.is_retryable() {
                    ErrorCode::ProviderUnavailable
                } else {
                    ErrorCode::ProviderRejected
                }
            }
            Self::Chain(_) => ErrorCode::BadOptionData,
            Self::Assembly(AssemblyError::UnmatchedLeg { .. }) => ErrorCode::UnmatchedLeg,
            Self::Assembly(_) => ErrorCode::InconsistentTrade,
            Self::Sink(_) | Self::Console(_) => ErrorCode::OutputFailed,
        }
    }

    /// Check if trying the same command again later may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        self.code().is_retryable()
    }
}

impl From<TradeStructureError> for GeneratorError {
    fn from(err: TradeStructureError) -> Self {
        match err {
            TradeStructureError::NotFound { name } => {
                Self::UserInput(UserInputError::TradeNotFound { name })
            }
            other => Self::Catalog(CatalogError::Invalid(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_reason() {
        assert_eq!(ErrorCode::TradeNotFound.reason(), "TRADE_NOT_FOUND");
        assert_eq!(ErrorCode::BadOptionData.to_string(), "BAD_OPTION_DATA");
    }

    #[test]
    fn test_error_code_serde() {
        let json = serde_json::to_string(&ErrorCode::UnmatchedLeg).unwrap();
        assert_eq!(json, "\"UNMATCHED_LEG\"");
    }

    #[test]
    fn test_not_found_becomes_user_input() {
        let err: GeneratorError = TradeStructureError::NotFound {
            name: "strangle".to_string(),
        }
        .into();

        assert!(matches!(err, GeneratorError::UserInput(_)));
        assert_eq!(err.code(), ErrorCode::TradeNotFound);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_structure_problem_becomes_catalog_error() {
        let err: GeneratorError = TradeStructureError::EmptyTrade {
            trade_name: "empty".to_string(),
        }
        .into();
        assert_eq!(err.code(), ErrorCode::CatalogUnavailable);
    }

    #[test]
    fn test_provider_classification() {
        let err = GeneratorError::from(ProviderError::Status {
            status: 502,
            message: String::new(),
        });
        assert_eq!(err.code(), ErrorCode::ProviderUnavailable);
        assert!(err.is_retryable());

        let err = GeneratorError::from(ProviderError::MissingApiKey);
        assert_eq!(err.code(), ErrorCode::ProviderRejected);

        let err = GeneratorError::from(ProviderError::RateLimited);
        assert_eq!(err.code(), ErrorCode::RateLimited);
    }

    #[test]
    fn test_chain_and_assembly_classification() {
        let err = GeneratorError::from(ChainError::BadData {
            symbol: "$SPX.X".to_string(),
        });
        assert_eq!(err.code(), ErrorCode::BadOptionData);
        assert!(err.is_retryable());

        let err = GeneratorError::from(AssemblyError::UnmatchedLeg { leg_id: 0 });
        assert_eq!(err.code(), ErrorCode::UnmatchedLeg);

        let err = GeneratorError::from(AssemblyError::Configuration {
            message: "x".to_string(),
        });
        assert_eq!(err.code(), ErrorCode::InconsistentTrade);
    }

    #[test]
    fn test_display_is_transparent() {
        let err = GeneratorError::from(UserInputError::TradeNotFound {
            name: "fly".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Trade not found in trade_structures file: fly"
        );
    }
}
